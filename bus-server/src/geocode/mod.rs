//! Forward geocoding of free-text destinations.

mod client;
mod error;

pub use client::{GeocodeClient, GeocodeConfig, GeocodedPlace};
pub use error::GeocodeError;
