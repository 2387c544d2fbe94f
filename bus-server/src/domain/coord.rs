//! Geographic coordinates and path geometry.
//!
//! Route paths are ordered sequences of WGS-84 coordinates. Everything the
//! advisor needs from geometry lives here: great-circle distance, path-length
//! accumulation, and the nearest-point-on-path scan.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres, used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 coordinate in degrees.
///
/// Serialized as a `[lat, lng]` pair to match the route file format.
///
/// # Examples
///
/// ```
/// use bus_server::domain::LatLng;
///
/// let zamora = LatLng::new(19.989, -102.283);
/// assert_eq!(zamora.distance_m(zamora), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in metres, via the haversine formula.
    ///
    /// Symmetric, and zero for coincident points.
    pub fn distance_m(self, other: LatLng) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(c: LatLng) -> Self {
        [c.lat, c.lng]
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Total length of a path in metres: the sum of great-circle distances
/// between consecutive points.
///
/// A path with fewer than two points has length zero.
pub fn path_length_m(points: &[LatLng]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_m(pair[1]))
        .sum()
}

/// Index of the path point nearest to `to`.
///
/// On an exact distance tie the earliest index wins (the scan only replaces
/// the best candidate on a strict improvement). Returns `None` for an empty
/// path.
pub fn nearest_point_index(points: &[LatLng], to: LatLng) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, pt) in points.iter().enumerate() {
        let d = to.distance_m(*pt);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }

    best.map(|(i, _)| i)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord_strategy() -> impl Strategy<Value = LatLng> {
        (-89.0f64..89.0, -180.0f64..180.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
            prop_assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
        }

        #[test]
        fn distance_is_non_negative(a in coord_strategy(), b in coord_strategy()) {
            prop_assert!(a.distance_m(b) >= 0.0);
        }

        #[test]
        fn distance_zero_to_self(a in coord_strategy()) {
            prop_assert_eq!(a.distance_m(a), 0.0);
        }

        #[test]
        fn nearest_point_is_in_bounds(
            points in prop::collection::vec(coord_strategy(), 0..20),
            query in coord_strategy(),
        ) {
            match nearest_point_index(&points, query) {
                Some(idx) => prop_assert!(idx < points.len()),
                None => prop_assert!(points.is_empty()),
            }
        }

        #[test]
        fn nearest_point_is_minimal(
            points in prop::collection::vec(coord_strategy(), 1..20),
            query in coord_strategy(),
        ) {
            let idx = nearest_point_index(&points, query).unwrap();
            let best = query.distance_m(points[idx]);
            for p in &points {
                prop_assert!(best <= query.distance_m(*p));
            }
        }
    }
}
