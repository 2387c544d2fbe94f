//! Per-route cost evaluation.
//!
//! Given one route, a rider position, a destination, and a time band, the
//! advisor either produces a full cost breakdown or rejects the route with a
//! reason. Selection over the whole catalog lives in `select`.

use crate::domain::{
    Assessment, Evaluation, LatLng, Route, TimeBand, UnusableReason, nearest_point_index,
    path_length_m,
};

use super::config::AdvisorConfig;

/// The route advisor: evaluates single routes and selects the best one.
///
/// Pure and stateless apart from its configuration; safe to use from any
/// number of concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'c> {
    pub(super) config: &'c AdvisorConfig,
}

impl<'c> Advisor<'c> {
    /// Create an advisor over a configuration.
    pub fn new(config: &'c AdvisorConfig) -> Self {
        Self { config }
    }

    /// Evaluate one route for a rider position and destination under a band.
    pub fn evaluate<'a>(
        &self,
        route: &'a Route,
        rider: LatLng,
        dest: LatLng,
        band: TimeBand,
    ) -> Assessment<'a> {
        // Board: nearest stop to the rider.
        let Some((board, walk_to_bus_m)) = route.nearest_stop(rider) else {
            return Assessment::Unusable {
                route,
                reason: UnusableReason::NoStops,
            };
        };

        // Alight: nearest stop to the destination.
        let Some((alight, walk_from_bus_m)) = route.nearest_stop(dest) else {
            return Assessment::Unusable {
                route,
                reason: UnusableReason::NoStops,
            };
        };

        // A route that leaves the rider too far from the destination is not
        // a candidate at all.
        if walk_from_bus_m > self.config.max_walk_from_bus_m {
            return Assessment::Unusable {
                route,
                reason: UnusableReason::AlightTooFar { walk_from_bus_m },
            };
        }

        let walk_to_bus_mins = self.walking_mins(walk_to_bus_m);
        let walk_from_bus_mins = self.walking_mins(walk_from_bus_m);

        // Riding segment: geometric re-derivation over the full path. The
        // stops' stored `index` values are deliberately NOT used here; see
        // `stops_between` below for the other source of truth.
        let board_idx = nearest_point_index(&route.points, board.coords).unwrap_or(0);
        let alight_idx = nearest_point_index(&route.points, alight.coords).unwrap_or(0);

        let (segment_start, segment_end) = if board_idx <= alight_idx {
            (board_idx, alight_idx)
        } else {
            (alight_idx, board_idx)
        };

        let bus_dist_m = route
            .points
            .get(segment_start..=segment_end)
            .map_or(0.0, path_length_m);

        let bus_mins = self
            .minutes_at(bus_dist_m, self.config.bus_speed_ms(band))
            .max(self.config.min_bus_mins);

        let wait_mins = self.config.wait_mins.get(band);

        let total_mins = walk_to_bus_mins + bus_mins + walk_from_bus_mins + wait_mins;

        let stops_between = stops_between(route, board.index, alight.index);

        Assessment::Usable(Evaluation {
            route,
            board,
            alight,
            walk_to_bus_m,
            walk_from_bus_m,
            walk_to_bus_mins,
            walk_from_bus_mins,
            bus_mins,
            wait_mins,
            total_mins,
            stops_between,
            segment_start,
            segment_end,
            band,
        })
    }

    /// Walking time for a distance, floored at the configured minimum.
    fn walking_mins(&self, distance_m: f64) -> u32 {
        self.minutes_at(distance_m, self.config.walk_speed_ms())
            .max(self.config.min_walk_mins)
    }

    /// Whole minutes to cover a distance at a speed in m/s.
    fn minutes_at(&self, distance_m: f64, speed_ms: f64) -> u32 {
        (distance_m / speed_ms / 60.0).round() as u32
    }
}

/// Stops whose stored `index` falls inside the inclusive board/alight window,
/// minus one, floored at zero.
///
/// Driven by the stops' stored `index` values rather than the geometric path
/// window: the two sources usually agree but are never reconciled, and this
/// count is informational only ("N paradas aproximadas").
fn stops_between(route: &Route, a: usize, b: usize) -> usize {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let in_window = route
        .stops
        .iter()
        .filter(|stop| stop.index >= start && stop.index <= end)
        .count();

    in_window.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stop;

    /// Metres of northward travel expressed as degrees of latitude.
    fn north(metres: f64) -> f64 {
        metres / 111_194.93
    }

    /// Metres of eastward travel expressed as degrees of longitude at ~20°N.
    fn east(metres: f64) -> f64 {
        metres / 104_486.6
    }

    const BASE: LatLng = LatLng {
        lat: 20.0,
        lng: -102.3,
    };

    fn at(north_m: f64, east_m: f64) -> LatLng {
        LatLng::new(BASE.lat + north(north_m), BASE.lng + east(east_m))
    }

    fn stop(index: usize, name: &str, coords: LatLng) -> Stop {
        Stop {
            index,
            name: name.to_string(),
            coords,
        }
    }

    /// A straight south-to-north route with a stop at every path point.
    fn straight_route(spacing_m: f64, n: usize) -> Route {
        let points: Vec<LatLng> = (0..n).map(|i| at(spacing_m * i as f64, 0.0)).collect();
        let stops = points
            .iter()
            .enumerate()
            .map(|(i, p)| stop(i, &format!("Parada {i}"), *p))
            .collect();
        Route::new("recta", "Ruta Recta", "#6b21a8", points, stops)
    }

    #[test]
    fn rejects_when_alight_too_far() {
        let route = straight_route(500.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        // Destination 2500 m east of the whole route: beyond the 2000 m max.
        let dest = at(1000.0, 2500.0);
        let result = advisor.evaluate(&route, BASE, dest, TimeBand::Morning);

        match result {
            Assessment::Unusable {
                reason: UnusableReason::AlightTooFar { walk_from_bus_m },
                ..
            } => assert!(walk_from_bus_m > 2_000.0),
            other => panic!("expected AlightTooFar, got {other:?}"),
        }
    }

    #[test]
    fn accepts_when_alight_within_threshold() {
        let route = straight_route(500.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        // Destination 1000 m east: within the 2000 m max.
        let dest = at(1000.0, 1000.0);
        let result = advisor.evaluate(&route, BASE, dest, TimeBand::Morning);

        assert!(result.is_usable());
    }

    #[test]
    fn rejects_route_without_stops() {
        let route = Route::new(
            "vacia",
            "Ruta Vacía",
            "#000000",
            vec![BASE, at(1000.0, 0.0)],
            vec![],
        );
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let result = advisor.evaluate(&route, BASE, at(500.0, 0.0), TimeBand::Morning);

        match result {
            Assessment::Unusable {
                reason: UnusableReason::NoStops,
                ..
            } => {}
            other => panic!("expected NoStops, got {other:?}"),
        }
    }

    #[test]
    fn single_point_path_floors_riding_time() {
        // One path point: no riding distance at all, but the floor applies.
        let route = Route::new(
            "punto",
            "Ruta Punto",
            "#000000",
            vec![BASE],
            vec![stop(0, "Única", BASE)],
        );
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let eval = advisor
            .evaluate(&route, BASE, at(0.0, 100.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.bus_mins, 3);
        assert_eq!(eval.segment_start, 0);
        assert_eq!(eval.segment_end, 0);
    }

    #[test]
    fn walking_floor_applies() {
        let route = straight_route(500.0, 3);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        // Rider 5 m from the first stop: still a 1-minute walk.
        let rider = at(5.0, 0.0);
        let eval = advisor
            .evaluate(&route, rider, at(1000.0, 0.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert!(eval.walk_to_bus_m < 6.0);
        assert_eq!(eval.walk_to_bus_mins, 1);
    }

    #[test]
    fn riding_floor_applies() {
        // Stops 10 m apart: the segment rounds to zero minutes, floored to 3.
        let route = straight_route(10.0, 2);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let eval = advisor
            .evaluate(&route, BASE, at(10.0, 0.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.bus_mins, 3);
    }

    #[test]
    fn cost_breakdown_for_straight_ride() {
        // 5 stops, 1 km apart; rider at the first stop, destination at the
        // last. Morning: 20 km/h bus, 3 min wait.
        let route = straight_route(1000.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let eval = advisor
            .evaluate(&route, BASE, at(4000.0, 0.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.board.name, "Parada 0");
        assert_eq!(eval.alight.name, "Parada 4");
        assert_eq!(eval.walk_to_bus_mins, 1);
        assert_eq!(eval.walk_from_bus_mins, 1);
        // 4000 m at 20 km/h = 12 minutes.
        assert_eq!(eval.bus_mins, 12);
        assert_eq!(eval.wait_mins, 3);
        assert_eq!(
            eval.total_mins,
            eval.walk_to_bus_mins + eval.bus_mins + eval.walk_from_bus_mins + eval.wait_mins
        );
        assert_eq!(eval.segment_start, 0);
        assert_eq!(eval.segment_end, 4);
    }

    #[test]
    fn band_changes_riding_and_wait() {
        let route = straight_route(1000.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);
        let dest = at(4000.0, 0.0);

        let midday = advisor
            .evaluate(&route, BASE, dest, TimeBand::Midday)
            .usable()
            .unwrap();

        // 4000 m at 14 km/h ≈ 17 minutes; midday wait is 4.
        assert_eq!(midday.bus_mins, 17);
        assert_eq!(midday.wait_mins, 4);
    }

    #[test]
    fn stops_between_inclusive_window() {
        // Board at stored index 1, alight at stored index 3 → two stops in
        // between-ish (3 in window, minus 1).
        let route = straight_route(1000.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let rider = at(1000.0, 0.0); // nearest stop index 1
        let dest = at(3000.0, 0.0); // nearest stop index 3

        let eval = advisor
            .evaluate(&route, rider, dest, TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.board.index, 1);
        assert_eq!(eval.alight.index, 3);
        assert_eq!(eval.stops_between, 2);
    }

    #[test]
    fn stops_between_same_stop_is_zero() {
        let route = straight_route(1000.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        // Rider and destination both nearest to stop 2.
        let eval = advisor
            .evaluate(&route, at(2000.0, 10.0), at(2000.0, 100.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.stops_between, 0);
    }

    #[test]
    fn reversed_travel_direction_swaps_window() {
        // Rider near the far end, destination near the start: the segment is
        // normalized to (min, max).
        let route = straight_route(1000.0, 5);
        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let eval = advisor
            .evaluate(&route, at(4000.0, 0.0), BASE, TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.segment_start, 0);
        assert_eq!(eval.segment_end, 4);
        assert_eq!(eval.stops_between, 4);
    }

    #[test]
    fn stored_index_and_geometry_can_diverge() {
        // A stop whose stored index disagrees with its geometric position:
        // the riding segment follows geometry, the stops-between count
        // follows the stored index. Both behaviors are load-bearing.
        let points: Vec<LatLng> = (0..5).map(|i| at(1000.0 * f64::from(i), 0.0)).collect();
        let stops = vec![
            stop(0, "Inicio", points[0]),
            // Stored index says 1, geometry says point 3.
            stop(1, "Desfasada", points[3]),
            stop(4, "Final", points[4]),
        ];
        let route = Route::new("desfase", "Ruta Desfase", "#333333", points, stops);

        let config = AdvisorConfig::default();
        let advisor = Advisor::new(&config);

        let eval = advisor
            .evaluate(&route, BASE, at(3000.0, 50.0), TimeBand::Morning)
            .usable()
            .unwrap();

        assert_eq!(eval.alight.name, "Desfasada");
        // Geometric window reaches path point 3...
        assert_eq!(eval.segment_start, 0);
        assert_eq!(eval.segment_end, 3);
        // ...but the count only sees stored indices 0 and 1 in [0, 1].
        assert_eq!(eval.stops_between, 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Stop;
    use proptest::prelude::*;

    fn coord_strategy() -> impl Strategy<Value = LatLng> {
        (19.9f64..20.1, -102.4f64..-102.2).prop_map(|(lat, lng)| LatLng::new(lat, lng))
    }

    fn route_strategy() -> impl Strategy<Value = Route> {
        prop::collection::vec(coord_strategy(), 1..12).prop_map(|points| {
            let stops = points
                .iter()
                .enumerate()
                .map(|(i, p)| Stop {
                    index: i,
                    name: format!("P{i}"),
                    coords: *p,
                })
                .collect();
            Route::new("r", "R", "#000000", points, stops)
        })
    }

    proptest! {
        #[test]
        fn usable_total_is_sum_of_parts(
            route in route_strategy(),
            rider in coord_strategy(),
            dest in coord_strategy(),
        ) {
            let config = AdvisorConfig::default();
            let advisor = Advisor::new(&config);

            if let Assessment::Usable(eval) =
                advisor.evaluate(&route, rider, dest, TimeBand::Morning)
            {
                prop_assert_eq!(
                    eval.total_mins,
                    eval.walk_to_bus_mins
                        + eval.bus_mins
                        + eval.walk_from_bus_mins
                        + eval.wait_mins
                );
            }
        }

        #[test]
        fn usable_respects_floors(
            route in route_strategy(),
            rider in coord_strategy(),
            dest in coord_strategy(),
        ) {
            let config = AdvisorConfig::default();
            let advisor = Advisor::new(&config);

            if let Assessment::Usable(eval) =
                advisor.evaluate(&route, rider, dest, TimeBand::Night)
            {
                prop_assert!(eval.walk_to_bus_mins >= config.min_walk_mins);
                prop_assert!(eval.walk_from_bus_mins >= config.min_walk_mins);
                prop_assert!(eval.bus_mins >= config.min_bus_mins);
            }
        }

        #[test]
        fn usable_segment_is_ordered_and_in_bounds(
            route in route_strategy(),
            rider in coord_strategy(),
            dest in coord_strategy(),
        ) {
            let config = AdvisorConfig::default();
            let advisor = Advisor::new(&config);

            if let Assessment::Usable(eval) =
                advisor.evaluate(&route, rider, dest, TimeBand::Midday)
            {
                prop_assert!(eval.segment_start <= eval.segment_end);
                prop_assert!(eval.segment_end < route.points.len());
            }
        }

        #[test]
        fn rejection_matches_threshold(
            route in route_strategy(),
            rider in coord_strategy(),
            dest in coord_strategy(),
        ) {
            let config = AdvisorConfig::default();
            let advisor = Advisor::new(&config);

            let (_, walk_from) = route.nearest_stop(dest).unwrap();
            let assessment = advisor.evaluate(&route, rider, dest, TimeBand::Evening);

            prop_assert_eq!(
                assessment.is_usable(),
                walk_from <= config.max_walk_from_bus_m
            );
        }
    }
}
