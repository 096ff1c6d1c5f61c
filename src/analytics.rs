//! Derived analytics shown beside the chart.
//!
//! Peak time is a decorative pick from a fixed list, not a statistic over
//! consumption data.

use rand::Rng;

use crate::appliance::{ApplianceState, ApplianceTable};

pub const PEAK_TIMES: [&str; 5] = [
    "19:00-21:00",
    "18:30-20:30",
    "20:00-22:00",
    "19:30-21:30",
    "18:00-20:00",
];

/// Pick a peak time range uniformly at random.
pub fn estimate_peak_time<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PEAK_TIMES[rng.gen_range(0..PEAK_TIMES.len())]
}

/// The running appliance with the highest rated wattage.
///
/// Ties go to the appliance that comes first in the table.
pub fn highest_consumer(table: &ApplianceTable) -> Option<&ApplianceState> {
    table.iter().filter(|a| a.is_on).fold(None, |best, a| match best {
        Some(b) if b.rated_power_watts >= a.rated_power_watts => Some(b),
        _ => Some(a),
    })
}

/// Total consumption perturbed by up to ±10%, never negative.
pub fn simulated_consumption<R: Rng + ?Sized>(total_watts: u32, rng: &mut R) -> f64 {
    let variation: f64 = rng.gen_range(-0.1..0.1);
    (f64::from(total_watts) * (1.0 + variation)).max(0.0)
}
