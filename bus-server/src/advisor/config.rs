//! Cost-model configuration for the route advisor.

use crate::domain::TimeBand;

/// A per-band lookup table.
#[derive(Debug, Clone, Copy)]
pub struct BandTable<T> {
    pub morning: T,
    pub midday: T,
    pub evening: T,
    pub night: T,
}

impl<T: Copy> BandTable<T> {
    /// The value for a band.
    pub fn get(&self, band: TimeBand) -> T {
        match band {
            TimeBand::Morning => self.morning,
            TimeBand::Midday => self.midday,
            TimeBand::Evening => self.evening,
            TimeBand::Night => self.night,
        }
    }
}

/// Speed and wait assumptions plus the thresholds the advisor compares
/// against.
///
/// Defaults are the values calibrated for the Zamora-Jacona network; every
/// field can be overridden per instance.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Walking speed, km/h.
    pub walk_speed_kmh: f64,

    /// Average bus speed per time band, km/h.
    pub bus_speed_kmh: BandTable<f64>,

    /// Average wait for a bus per time band, minutes.
    pub wait_mins: BandTable<u32>,

    /// Maximum walk from the alight stop to the destination, metres.
    /// Routes that drop the rider further away are rejected outright.
    pub max_walk_from_bus_m: f64,

    /// Margin within which two routes' destination proximity counts as
    /// "similar", metres. A candidate must undercut the incumbent by more
    /// than this to win on proximity alone.
    pub dest_priority_margin_m: f64,

    /// Minimum riding time, minutes.
    pub min_bus_mins: u32,

    /// Minimum walking time, minutes.
    pub min_walk_mins: u32,
}

impl AdvisorConfig {
    /// Walking speed in metres per second.
    pub fn walk_speed_ms(&self) -> f64 {
        kmh_to_ms(self.walk_speed_kmh)
    }

    /// Bus speed for a band in metres per second.
    pub fn bus_speed_ms(&self, band: TimeBand) -> f64 {
        kmh_to_ms(self.bus_speed_kmh.get(band))
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            walk_speed_kmh: 4.5,
            bus_speed_kmh: BandTable {
                morning: 20.0,
                midday: 14.0,
                evening: 14.0,
                night: 25.0,
            },
            wait_mins: BandTable {
                morning: 3,
                midday: 4,
                evening: 4,
                night: 3,
            },
            max_walk_from_bus_m: 2_000.0,
            dest_priority_margin_m: 150.0,
            min_bus_mins: 3,
            min_walk_mins: 1,
        }
    }
}

fn kmh_to_ms(kmh: f64) -> f64 {
    kmh * 1000.0 / 3600.0
}
