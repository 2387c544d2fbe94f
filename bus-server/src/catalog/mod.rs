//! Route catalog: loading and destination suggestions.
//!
//! The catalog is loaded once at startup and shared read-only for the life
//! of the process; searches never mutate it.

mod error;
mod loader;
mod suggest;

use std::path::Path;

use crate::domain::Route;

pub use error::CatalogError;
pub use loader::{ParadaRecord, RouteFile, load_dir, load_file};
pub use suggest::{Destination, normalize};

/// The loaded route catalog plus the destination index derived from it.
#[derive(Debug)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    destinations: Vec<Destination>,
}

impl RouteCatalog {
    /// Load the catalog from a directory of route files.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Ok(Self::from_routes(load_dir(dir)?))
    }

    /// Build a catalog from already-loaded routes (used by tests).
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let destinations = suggest::destinations(&routes);
        Self {
            routes,
            destinations,
        }
    }

    /// The routes in catalog (filename) order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every stop as a typed-destination candidate.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Search destinations by stop or route name.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&Destination> {
        suggest::search(&self.destinations, query, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLng, Stop};

    #[test]
    fn catalog_builds_destination_index() {
        let route = Route::new(
            "cafe",
            "Ruta Café",
            "#92400e",
            vec![LatLng::new(19.99, -102.28), LatLng::new(20.0, -102.27)],
            vec![Stop {
                index: 0,
                name: "Jardín Principal".to_string(),
                coords: LatLng::new(19.99, -102.28),
            }],
        );

        let catalog = RouteCatalog::from_routes(vec![route]);

        assert_eq!(catalog.routes().len(), 1);
        assert_eq!(catalog.destinations().len(), 1);
        assert_eq!(catalog.suggest("jardin", 8).len(), 1);
    }
}
