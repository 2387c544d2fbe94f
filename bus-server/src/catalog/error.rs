//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading the route catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Filesystem access failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A route file did not parse as the expected schema
    #[error("invalid route file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The catalog directory contained no route files
    #[error("no route files found in {path}")]
    Empty { path: PathBuf },
}
