use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use bus_server::advisor::AdvisorConfig;
use bus_server::cache::{CachedGeocoder, GeocodeCacheConfig};
use bus_server::catalog::RouteCatalog;
use bus_server::geocode::{GeocodeClient, GeocodeConfig};
use bus_server::web::{AppState, create_router};

/// Default directory holding the per-route JSON files.
const DEFAULT_ROUTES_DIR: &str = "data/rutas";

/// Default directory for static frontend assets.
const DEFAULT_STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the geocoding key from the environment
    let api_key = std::env::var("GEOAPIFY_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("GEOAPIFY_API_KEY not set; free-text destination search will fail");
        String::new()
    });

    let routes_dir =
        std::env::var("ROUTES_DIR").unwrap_or_else(|_| DEFAULT_ROUTES_DIR.to_string());

    // Load the route catalog (fail fast if unavailable)
    let catalog = RouteCatalog::load_dir(&routes_dir).expect("Failed to load route catalog");
    tracing::info!(
        routes = catalog.routes().len(),
        stops = catalog.destinations().len(),
        dir = %routes_dir,
        "route catalog loaded"
    );

    // Create the cached geocoding client
    let geocode_client =
        GeocodeClient::new(GeocodeConfig::new(&api_key)).expect("Failed to create geocode client");
    let geocoder = CachedGeocoder::new(geocode_client, &GeocodeCacheConfig::default());

    // Build app state and router
    let state = AppState::new(catalog, geocoder, AdvisorConfig::default());
    let app = create_router(state, DEFAULT_STATIC_DIR);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("bus route advisor listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
