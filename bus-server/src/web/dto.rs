//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::Destination;
use crate::domain::{Evaluation, LatLng, Route, Stop, TimeBand};

/// Request to list destination suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// The partial destination text
    pub q: String,

    /// Maximum number of suggestions (default 8, capped at 50)
    pub limit: Option<usize>,
}

/// Response for destination suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionResult>,
}

/// A single destination suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestionResult {
    /// Stable id, `{route_id}-{stop_index}`
    pub id: String,

    /// Stop name
    pub label: String,

    /// Display form: "stop · route"
    pub label_full: String,

    pub lat: f64,
    pub lng: f64,

    /// Route the stop belongs to
    pub route_id: String,
}

impl SuggestionResult {
    pub fn from_destination(d: &Destination) -> Self {
        Self {
            id: d.id.clone(),
            label: d.label.clone(),
            label_full: d.label_full.clone(),
            lat: d.coords.lat,
            lng: d.coords.lng,
            route_id: d.route_id.clone(),
        }
    }
}

/// Response for the route catalog.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// One route, as the map frontend consumes it.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub id: String,
    pub label: String,
    pub color: String,

    /// Total path length, whole metres
    pub total_distance_m: u64,

    /// Path points as `[lat, lng]` pairs
    pub points: Vec<LatLng>,

    pub stops: Vec<StopResult>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.clone(),
            label: route.label.clone(),
            color: route.color.clone(),
            total_distance_m: route.total_distance_m().round() as u64,
            points: route.points.clone(),
            stops: route.stops.iter().map(StopResult::from_stop).collect(),
        }
    }
}

/// A stop in responses.
#[derive(Debug, Clone, Serialize)]
pub struct StopResult {
    pub index: usize,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            index: stop.index,
            name: stop.name.clone(),
            lat: stop.coords.lat,
            lng: stop.coords.lng,
        }
    }
}

/// A coordinate in requests.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl From<Position> for LatLng {
    fn from(p: Position) -> Self {
        LatLng::new(p.lat, p.lng)
    }
}

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// The rider's current position
    pub rider: Position,

    /// Destination as typed (used for geocoding and display)
    pub destination: String,

    /// Resolved destination coordinates, present when the rider picked a
    /// suggestion; skips geocoding
    #[serde(default)]
    pub dest: Option<Position>,
}

/// Response for a planned trip.
///
/// `itinerary` is `None` when no route leaves the rider reasonably close to
/// the destination. That is a defined outcome, not an error.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub destination_label: String,
    pub itinerary: Option<ItineraryResult>,
}

/// The winning route's cost breakdown, ready for rendering.
///
/// Distances are whole metres, times whole minutes.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub route_id: String,
    pub route_label: String,
    pub route_color: String,
    pub band: TimeBand,
    pub board: StopResult,
    pub alight: StopResult,
    pub walk_to_bus_m: u32,
    pub walk_to_bus_mins: u32,
    pub walk_from_bus_m: u32,
    pub walk_from_bus_mins: u32,
    pub bus_mins: u32,
    pub wait_mins: u32,
    pub total_mins: u32,
    pub stops_between: usize,

    /// Riding-segment window into the route's path points, inclusive; the
    /// frontend slices the polyline it already has from `/api/routes`.
    pub segment_start: usize,
    pub segment_end: usize,
}

impl ItineraryResult {
    pub fn from_evaluation(eval: &Evaluation<'_>) -> Self {
        Self {
            route_id: eval.route.id.clone(),
            route_label: eval.route.label.clone(),
            route_color: eval.route.color.clone(),
            band: eval.band,
            board: StopResult::from_stop(eval.board),
            alight: StopResult::from_stop(eval.alight),
            walk_to_bus_m: eval.walk_to_bus_m.round() as u32,
            walk_to_bus_mins: eval.walk_to_bus_mins,
            walk_from_bus_m: eval.walk_from_bus_m.round() as u32,
            walk_from_bus_mins: eval.walk_from_bus_mins,
            bus_mins: eval.bus_mins,
            wait_mins: eval.wait_mins,
            total_mins: eval.total_mins,
            stops_between: eval.stops_between,
            segment_start: eval.segment_start,
            segment_end: eval.segment_end,
        }
    }
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
