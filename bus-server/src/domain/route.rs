//! Route and stop entities.

use super::coord::{LatLng, path_length_m};

/// A named stop on a route.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Position in the route's path-point sequence this stop corresponds to,
    /// assigned at data-load time. Stops are assumed (not enforced) to be
    /// ordered with non-decreasing `index` along the direction of travel.
    pub index: usize,

    /// Rider-facing stop name.
    pub name: String,

    /// Stop location.
    pub coords: LatLng,
}

/// A fixed bus route: an ordered path and the stops along it.
#[derive(Debug, Clone)]
pub struct Route {
    /// Stable identifier (the route file's `name` field).
    pub id: String,

    /// Rider-facing route name.
    pub label: String,

    /// Display colour for map rendering.
    pub color: String,

    /// Path points in travel order.
    pub points: Vec<LatLng>,

    /// Stops in travel order.
    pub stops: Vec<Stop>,

    /// Total path length in metres, computed once at load. Informational.
    total_distance_m: f64,
}

impl Route {
    /// Build a route, computing its total path distance.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        points: Vec<LatLng>,
        stops: Vec<Stop>,
    ) -> Self {
        let total_distance_m = path_length_m(&points);
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            points,
            stops,
            total_distance_m,
        }
    }

    /// Total path length in metres.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// The stop nearest to `to` and its distance in metres.
    ///
    /// On an exact distance tie the earliest stop in travel order wins.
    /// Returns `None` for a route with no stops.
    pub fn nearest_stop(&self, to: LatLng) -> Option<(&Stop, f64)> {
        let mut best: Option<(&Stop, f64)> = None;

        for stop in &self.stops {
            let d = to.distance_m(stop.coords);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((stop, d)),
            }
        }

        best
    }
}
