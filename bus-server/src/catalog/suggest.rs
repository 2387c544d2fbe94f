//! Destination suggestions over stop names.
//!
//! Every stop in the catalog doubles as a typed-destination candidate so
//! riders can pick a known stop instead of geocoding free text. Matching is
//! case- and accent-insensitive substring search over the display form
//! ("stop · route"), which is what the rider sees in the suggestion list.

use crate::domain::{LatLng, Route};

/// A stop offered as a typed-destination match.
#[derive(Debug, Clone)]
pub struct Destination {
    /// Stable id, `{route_id}-{stop_index}`.
    pub id: String,

    /// Stop name as shown once picked.
    pub label: String,

    /// Display form shown in the suggestion list: "stop · route".
    pub label_full: String,

    /// Stop location.
    pub coords: LatLng,

    /// The route the stop belongs to.
    pub route_id: String,

    /// The stop's stored index on that route.
    pub stop_index: usize,

    /// Normalized `label_full`, precomputed for matching.
    normalized: String,
}

/// Build the destination list from the loaded routes, in catalog order.
pub fn destinations(routes: &[Route]) -> Vec<Destination> {
    let mut out = Vec::new();

    for route in routes {
        for stop in &route.stops {
            let label_full = format!("{} · {}", stop.name, route.label);
            out.push(Destination {
                id: format!("{}-{}", route.id, stop.index),
                label: stop.name.clone(),
                normalized: normalize(&label_full),
                label_full,
                coords: stop.coords,
                route_id: route.id.clone(),
                stop_index: stop.index,
            });
        }
    }

    out
}

/// Search destinations for a query, returning at most `limit` matches.
///
/// An empty (or all-punctuation) query matches nothing.
pub fn search<'a>(
    destinations: &'a [Destination],
    query: &str,
    limit: usize,
) -> Vec<&'a Destination> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }

    destinations
        .iter()
        .filter(|d| d.normalized.contains(&q))
        .take(limit)
        .collect()
}

/// Fold a string to its search form: lowercase, Spanish diacritics stripped,
/// punctuation collapsed to single spaces, trimmed.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        let c = fold_diacritic(c);
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' | 'ü' => 'u',
        'ñ' => 'n',
        _ => c,
    }
}
