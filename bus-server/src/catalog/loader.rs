//! Route file loading.
//!
//! One JSON file per route, read from a directory at startup. The wire
//! schema keeps the Spanish field names the route files were authored with
//! (`paradas`, `nombre`); everything is converted to domain types here and
//! the rest of the crate never sees the raw records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{LatLng, Route, Stop};

use super::error::CatalogError;

/// Raw per-route record as stored on disk.
#[derive(Debug, Deserialize)]
pub struct RouteFile {
    pub name: String,
    pub label: String,
    pub color: String,

    /// Free-form metadata; carried by the files but unused by the advisor.
    #[serde(default)]
    pub meta: serde_json::Value,

    pub points: Vec<LatLng>,
    pub paradas: Vec<ParadaRecord>,
}

/// Raw stop record.
#[derive(Debug, Deserialize)]
pub struct ParadaRecord {
    pub index: usize,
    pub nombre: String,
    pub coords: LatLng,
}

impl RouteFile {
    /// Convert the raw record into a domain route.
    pub fn into_route(self) -> Route {
        let stops = self
            .paradas
            .into_iter()
            .map(|p| Stop {
                index: p.index,
                name: p.nombre,
                coords: p.coords,
            })
            .collect();

        Route::new(self.name, self.label, self.color, self.points, stops)
    }
}

/// Load every `*.json` route file in a directory.
///
/// Files are loaded in filename order so the catalog order, which the
/// selector's reduction is sensitive to, is deterministic across runs.
/// Degenerate routes (no stops, or a path of fewer than two points) are
/// loaded with a warning; the advisor handles them as unusable.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Route>, CatalogError> {
    let dir = dir.as_ref();

    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CatalogError::Empty {
            path: dir.to_path_buf(),
        });
    }

    let mut routes = Vec::with_capacity(files.len());
    for path in files {
        routes.push(load_file(&path)?);
    }

    Ok(routes)
}

/// Load a single route file.
pub fn load_file(path: &Path) -> Result<Route, CatalogError> {
    let body = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record: RouteFile =
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let route = record.into_route();

    if route.stops.is_empty() {
        tracing::warn!(route = %route.id, "route has no stops; it will never be suggested");
    }
    if route.points.len() < 2 {
        tracing::warn!(route = %route.id, "route path has fewer than two points");
    }

    Ok(route)
}
