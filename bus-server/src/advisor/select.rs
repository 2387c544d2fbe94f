//! Best-route selection over the catalog.
//!
//! The selector is a single left-to-right reduction with an incumbent: each
//! candidate is compared only against the current best, never against the
//! whole field. The pairwise relation ("drops meaningfully closer, else
//! faster") is not transitive, so with three or more routes the winner can
//! depend on catalog order. That is intended behavior: replacing the
//! reduction with a sort or argmin would silently change which route wins.

use crate::domain::{Evaluation, LatLng, Route, TimeBand};

use super::evaluate::Advisor;

impl<'c> Advisor<'c> {
    /// Pick the best usable route for a rider position and destination.
    ///
    /// All routes are evaluated under the same `band`, so the whole catalog
    /// is compared under identical time-of-day assumptions. Returns `None`
    /// when no route is usable.
    pub fn select_best<'a>(
        &self,
        routes: &'a [Route],
        rider: LatLng,
        dest: LatLng,
        band: TimeBand,
    ) -> Option<Evaluation<'a>> {
        let mut best: Option<Evaluation<'a>> = None;

        for route in routes {
            let Some(candidate) = self.evaluate(route, rider, dest, band).usable() else {
                continue;
            };

            best = Some(match best {
                None => candidate,
                Some(incumbent) => self.challenge(incumbent, candidate),
            });
        }

        best
    }

    /// One step of the incumbent-replacement rule.
    ///
    /// The candidate wins if it drops the rider more than the margin closer
    /// to the destination; at similar proximity (within the margin) a
    /// strictly smaller total time wins. Otherwise the incumbent stays.
    fn challenge<'a>(
        &self,
        incumbent: Evaluation<'a>,
        candidate: Evaluation<'a>,
    ) -> Evaluation<'a> {
        let margin = self.config.dest_priority_margin_m;

        let drops_closer = candidate.walk_from_bus_m + margin < incumbent.walk_from_bus_m;

        let similar = (candidate.walk_from_bus_m - incumbent.walk_from_bus_m).abs() <= margin;
        let faster = candidate.total_mins < incumbent.total_mins;

        if drops_closer || (similar && faster) {
            candidate
        } else {
            incumbent
        }
    }
}
