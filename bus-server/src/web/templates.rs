//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Evaluation;

// ============================================================================
// Page Templates
// ============================================================================

/// Map shell with the destination search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Itinerary panel for a planned trip.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub destination_label: String,
    pub itinerary: ItineraryView,
}

/// Panel shown when no route is viable.
#[derive(Template)]
#[template(path = "no_route.html")]
pub struct NoRouteTemplate {
    pub destination_label: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Itinerary view model: everything the panel shows, pre-rounded.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub route_label: String,
    pub board_name: String,
    pub alight_name: String,
    pub walk_to_bus_m: u32,
    pub walk_to_bus_mins: u32,
    pub walk_from_bus_m: u32,
    pub walk_from_bus_mins: u32,
    pub bus_mins: u32,
    pub wait_mins: u32,
    pub total_mins: u32,
    pub stops_between: usize,

    /// Day-period label for the riding-time line (mañana/tarde/noche).
    pub period_label: &'static str,
}

impl ItineraryView {
    pub fn from_evaluation(eval: &Evaluation<'_>) -> Self {
        Self {
            route_label: eval.route.label.clone(),
            board_name: eval.board.name.clone(),
            alight_name: eval.alight.name.clone(),
            walk_to_bus_m: eval.walk_to_bus_m.round() as u32,
            walk_to_bus_mins: eval.walk_to_bus_mins,
            walk_from_bus_m: eval.walk_from_bus_m.round() as u32,
            walk_from_bus_mins: eval.walk_from_bus_mins,
            bus_mins: eval.bus_mins,
            wait_mins: eval.wait_mins,
            total_mins: eval.total_mins,
            stops_between: eval.stops_between,
            period_label: eval.band.period_label(),
        }
    }
}
