//! Route evaluation and selection.
//!
//! This module answers the question at the heart of the system: "standing
//! here, wanting to get there: which bus, which stop, how long?" It
//! evaluates each catalog route against a rider position, a destination, and
//! the current time band, then reduces the usable candidates to a single
//! recommendation under a "closer to the destination wins, else faster wins"
//! policy.

mod config;
mod evaluate;
mod select;

pub use config::{AdvisorConfig, BandTable};
pub use evaluate::Advisor;
