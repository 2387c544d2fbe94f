//! Web layer for the bus route advisor.
//!
//! HTTP endpoints for destination suggestions, the route catalog, and trip
//! planning. Presentation is strictly one-way: handlers hand a finished
//! evaluation to the DTO/template conversions and hold no view state;
//! overlay and marker teardown between searches is the frontend's job.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
