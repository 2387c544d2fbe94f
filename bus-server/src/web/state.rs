//! Application state for the web layer.

use std::sync::Arc;

use crate::advisor::AdvisorConfig;
use crate::cache::CachedGeocoder;
use crate::catalog::RouteCatalog;

/// Shared application state.
///
/// Everything a request handler needs, owned explicitly and shared via
/// `Arc`; the advisor itself is stateless.
#[derive(Clone)]
pub struct AppState {
    /// The loaded route catalog (read-only for the life of the process).
    pub catalog: Arc<RouteCatalog>,

    /// Cached geocoding client.
    pub geocoder: Arc<CachedGeocoder>,

    /// Advisor cost-model configuration.
    pub config: Arc<AdvisorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: RouteCatalog, geocoder: CachedGeocoder, config: AdvisorConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            geocoder: Arc::new(geocoder),
            config: Arc::new(config),
        }
    }
}
