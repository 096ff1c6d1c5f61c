//! Collaborator seams between the controller and whatever displays it.
//!
//! The controller never reads view state back. It writes text and toggles a
//! binary "active" flag through [`ViewSurface`], and hands complete chart
//! specifications to a [`ChartRenderer`].

pub mod chart;
pub mod snapshot;

pub use chart::ChartSpec;
pub use snapshot::{DashboardSnapshot, DrawnChart, ElementState, SnapshotChart, SnapshotView};

use crate::appliance::{ApplianceId, ApplianceState};
use crate::locale::Locale;
use crate::power::Period;

/// Fixed element ids on the dashboard page.
pub mod ids {
    pub const CURRENT_TIME: &str = "currentTime";
    pub const PEAK_TIME: &str = "peak-time";
    pub const HIGHEST_CONSUMER: &str = "highest-consumer";
    pub const HIGHEST_POWER: &str = "highest-power";
    pub const POWER_CHART: &str = "powerChart";
}

/// Display surface with one method per field the controller writes.
pub trait ViewSurface {
    fn set_status_indicator(&mut self, id: ApplianceId, active: bool);
    fn set_status_text(&mut self, id: ApplianceId, text: &str);
    fn set_power_readout(&mut self, id: ApplianceId, text: &str);
    fn set_toggle_control(&mut self, id: ApplianceId, label: &str, active: bool);
    fn set_clock(&mut self, text: &str);
    fn set_period_button(&mut self, period: Period, active: bool);
    fn set_peak_time(&mut self, text: &str);
    fn set_highest_consumer(&mut self, name: &str, power: &str);
}

/// External charting library. Each call replaces whatever chart occupies
/// `container`.
pub trait ChartRenderer {
    fn draw(&mut self, container: &str, spec: &ChartSpec);
}

/// Everything an appliance card shows, derived from `is_on` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceFacets {
    pub indicator_active: bool,
    pub status_text: &'static str,
    pub power_text: String,
    pub toggle_label: &'static str,
    pub toggle_active: bool,
}

impl ApplianceFacets {
    pub fn of(state: &ApplianceState, locale: Locale) -> Self {
        let strings = locale.strings();
        if state.is_on {
            Self {
                indicator_active: true,
                status_text: strings.status_on,
                power_text: watts(state.rated_power_watts),
                toggle_label: strings.action_turn_off,
                toggle_active: true,
            }
        } else {
            Self {
                indicator_active: false,
                status_text: strings.status_off,
                power_text: watts(0),
                toggle_label: strings.action_turn_on,
                toggle_active: false,
            }
        }
    }

    /// Push all four facets of `id` to the surface.
    pub fn apply<V: ViewSurface + ?Sized>(&self, id: ApplianceId, view: &mut V) {
        view.set_status_indicator(id, self.indicator_active);
        view.set_status_text(id, self.status_text);
        view.set_power_readout(id, &self.power_text);
        view.set_toggle_control(id, self.toggle_label, self.toggle_active);
    }
}

/// Format a wattage readout, e.g. `850W`.
pub fn watts(value: u32) -> String {
    format!("{}W", value)
}
