//! Domain types for the bus route advisor.
//!
//! Geometry primitives, time bands, and the route/stop/evaluation entities
//! the advisor computes over. Everything here is pure and synchronous; the
//! async edges of the system (catalog load, geocoding, HTTP) feed these
//! types already-resolved data.

mod band;
mod coord;
mod evaluation;
mod route;

pub use band::TimeBand;
pub use coord::{LatLng, nearest_point_index, path_length_m};
pub use evaluation::{Assessment, Evaluation, UnusableReason};
pub use route::{Route, Stop};
