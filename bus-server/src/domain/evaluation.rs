//! Evaluation results produced by the route advisor.

use super::band::TimeBand;
use super::route::{Route, Stop};

/// The full cost breakdown for riding one route from a rider position to a
/// destination.
///
/// Produced by the advisor for one (route, rider, destination, band) input;
/// immutable, and borrows the catalog it was evaluated against. Distances are
/// metres, times are whole minutes.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    /// The evaluated route.
    pub route: &'a Route,

    /// Stop where the rider boards (nearest stop to the rider).
    pub board: &'a Stop,

    /// Stop where the rider alights (nearest stop to the destination).
    pub alight: &'a Stop,

    /// Walk from the rider's position to the board stop, metres.
    pub walk_to_bus_m: f64,

    /// Walk from the alight stop to the destination, metres.
    pub walk_from_bus_m: f64,

    /// Estimated walking time to the board stop.
    pub walk_to_bus_mins: u32,

    /// Estimated walking time from the alight stop.
    pub walk_from_bus_mins: u32,

    /// Estimated riding time between the board and alight stops.
    pub bus_mins: u32,

    /// Average wait for the bus in the evaluated band.
    pub wait_mins: u32,

    /// Door-to-door total.
    pub total_mins: u32,

    /// Approximate number of stops ridden past, derived from the stops'
    /// stored `index` values (not the geometric segment). Informational.
    pub stops_between: usize,

    /// First path index of the riding segment (inclusive).
    pub segment_start: usize,

    /// Last path index of the riding segment (inclusive).
    pub segment_end: usize,

    /// Time band the costs were computed under.
    pub band: TimeBand,
}

/// Why a route was rejected as a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnusableReason {
    /// The nearest stop to the destination is further than the configured
    /// maximum walk; riding this route would not leave the rider reasonably
    /// close.
    AlightTooFar {
        /// Distance from the alight stop to the destination, metres.
        walk_from_bus_m: f64,
    },

    /// The route has no stops to board or alight at.
    NoStops,
}

/// Outcome of evaluating a single route.
///
/// A rejected route carries no cost breakdown at all, so callers cannot
/// accidentally read fields that were never computed.
#[derive(Debug, Clone)]
pub enum Assessment<'a> {
    /// The route is a viable candidate.
    Usable(Evaluation<'a>),

    /// The route was rejected.
    Unusable {
        route: &'a Route,
        reason: UnusableReason,
    },
}

impl<'a> Assessment<'a> {
    /// The evaluation, if the route was usable.
    pub fn usable(self) -> Option<Evaluation<'a>> {
        match self {
            Assessment::Usable(eval) => Some(eval),
            Assessment::Unusable { .. } => None,
        }
    }

    /// Whether the route was usable.
    pub fn is_usable(&self) -> bool {
        matches!(self, Assessment::Usable(_))
    }
}
