//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::advisor::Advisor;
use crate::domain::{LatLng, TimeBand};
use crate::geocode::GeocodeError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/routes", get(route_catalog))
        .route("/api/suggest", get(suggest))
        .route("/plan", post(plan_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the map shell and search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// The full route catalog, for map rendering.
async fn route_catalog(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state
        .catalog
        .routes()
        .iter()
        .map(RouteResult::from_route)
        .collect();

    Json(RoutesResponse { routes })
}

/// Destination suggestions by stop or route name.
async fn suggest(
    State(state): State<AppState>,
    Query(req): Query<SuggestRequest>,
) -> Json<SuggestResponse> {
    let limit = req.limit.unwrap_or(8).min(50);
    let matches = state.catalog.suggest(&req.q, limit);

    let suggestions = matches
        .into_iter()
        .map(SuggestionResult::from_destination)
        .collect();

    Json(SuggestResponse { suggestions })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a trip from the rider's position to a destination.
async fn plan_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "rejected unparseable plan request"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.destination.trim().is_empty() && req.dest.is_none() {
        return Err(AppError::BadRequest {
            message: "destination must not be empty".to_string(),
        });
    }

    // Resolve the destination. A picked suggestion arrives with coordinates
    // and skips geocoding entirely.
    let (dest, dest_label) = match req.dest {
        Some(pos) => (LatLng::from(pos), req.destination.clone()),
        None => {
            let place = state.geocoder.forward(&req.destination).await?;
            (place.coords, place.label.clone())
        }
    };

    let rider = LatLng::from(req.rider);

    // One band per search, shared by every route comparison.
    let band = TimeBand::current();

    let advisor = Advisor::new(&state.config);
    let best = advisor.select_best(state.catalog.routes(), rider, dest, band);

    match &best {
        Some(eval) => tracing::info!(
            route = %eval.route.id,
            total_mins = eval.total_mins,
            %band,
            "trip planned"
        ),
        None => tracing::info!(destination = %dest_label, "no viable route"),
    }

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let html = match &best {
            Some(eval) => ItineraryTemplate {
                destination_label: dest_label,
                itinerary: ItineraryView::from_evaluation(eval),
            }
            .render(),
            None => NoRouteTemplate {
                destination_label: dest_label,
            }
            .render(),
        }
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        let itinerary = best.as_ref().map(ItineraryResult::from_evaluation);

        Ok(Json(PlanResponse {
            destination_label: dest_label,
            itinerary,
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::NoMatch => AppError::NotFound {
                message: "no match for destination".to_string(),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::warn!(%status, error = %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
