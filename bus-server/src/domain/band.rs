//! Coarse time-of-day bands.
//!
//! Bus speed and average wait vary over the day much more than they vary
//! between individual routes, so the cost model keys its assumptions off a
//! four-way partition of the clock rather than per-route timetables.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// One of four coarse time-of-day categories used to select speed and wait
/// assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBand {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimeBand {
    /// Classify an hour of day (0-23) into a band.
    ///
    /// Half-open partition: morning [5,11), midday [11,17), evening [17,21);
    /// night covers everything else, including the 21-5 wrap. Every hour maps
    /// to exactly one band.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => TimeBand::Morning,
            11..=16 => TimeBand::Midday,
            17..=20 => TimeBand::Evening,
            _ => TimeBand::Night,
        }
    }

    /// The band for the current local time.
    pub fn current() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Day-period label used in the rider-facing itinerary text.
    pub fn period_label(self) -> &'static str {
        match self {
            TimeBand::Morning => "mañana",
            TimeBand::Night => "noche",
            TimeBand::Midday | TimeBand::Evening => "tarde",
        }
    }
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeBand::Morning => "morning",
            TimeBand::Midday => "midday",
            TimeBand::Evening => "evening",
            TimeBand::Night => "night",
        };
        f.write_str(name)
    }
}
