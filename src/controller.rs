//! DashboardController - the single owner of appliance and period state.
//!
//! Every operation runs synchronously to completion: it mutates the in-memory
//! table, then writes the affected fields to the view surface and, for period
//! changes, redraws the chart. Hosts serialize access (see
//! [`crate::runtime`]); the controller itself holds no locks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::analytics;
use crate::appliance::{ApplianceId, ApplianceState, ApplianceTable};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::input::InputAction;
use crate::locale::Locale;
use crate::power::{Period, PowerSeries};
use crate::view::{ids, watts, ApplianceFacets, ChartRenderer, ChartSpec, ViewSurface};

pub struct DashboardController<V, C> {
    appliances: ApplianceTable,
    current_period: Period,
    peak_time: Option<&'static str>,
    locale: Locale,
    view: V,
    chart: C,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl<V: ViewSurface, C: ChartRenderer> DashboardController<V, C> {
    /// Build the initial state. Nothing is rendered until [`Self::mount`].
    pub fn new(view: V, chart: C, locale: Locale) -> Self {
        Self {
            appliances: ApplianceTable::new(locale),
            current_period: Period::Weekly,
            peak_time: None,
            locale,
            view,
            chart,
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Initial render pass: clock, every appliance card, period buttons,
    /// chart, analytics.
    pub fn mount(&mut self) {
        info!(
            "Mounting dashboard (locale {}, period {})",
            self.locale.tag(),
            self.current_period
        );
        self.refresh_clock();
        for id in ApplianceId::ALL {
            self.render_appliance_display(id);
        }
        self.render_period_buttons();
        self.draw_power_chart();
        self.refresh_analytics();
    }

    pub fn toggle_appliance(&mut self, id: ApplianceId) -> &ApplianceState {
        let is_on = self.appliances.toggle(id);
        debug!("Toggled {} -> {}", id, if is_on { "on" } else { "off" });
        self.render_appliance_display(id);
        self.refresh_analytics();
        self.appliances.get(id)
    }

    /// Toggle by string id, rejecting ids outside the fixed set.
    pub fn toggle_appliance_by_id(&mut self, id: &str) -> Result<&ApplianceState> {
        let id = id.parse::<ApplianceId>()?;
        Ok(self.toggle_appliance(id))
    }

    pub fn render_appliance_display(&mut self, id: ApplianceId) {
        ApplianceFacets::of(self.appliances.get(id), self.locale).apply(id, &mut self.view);
    }

    pub fn switch_period(&mut self, period: Period) {
        debug!("Switching period {} -> {}", self.current_period, period);
        self.current_period = period;
        self.render_period_buttons();
        self.draw_power_chart();
    }

    /// Switch by string id, rejecting anything but `weekly` / `monthly`.
    pub fn switch_period_by_id(&mut self, period: &str) -> Result<()> {
        let period = period.parse::<Period>()?;
        self.switch_period(period);
        Ok(())
    }

    fn render_period_buttons(&mut self) {
        for period in Period::ALL {
            self.view
                .set_period_button(period, period == self.current_period);
        }
    }

    pub fn draw_power_chart(&mut self) {
        let spec = ChartSpec::power_usage(self.current_period, self.locale);
        self.chart.draw(ids::POWER_CHART, &spec);
    }

    pub fn refresh_clock(&mut self) {
        let text = self.locale.format_clock(&self.clock.now());
        self.view.set_clock(&text);
    }

    pub fn refresh_analytics(&mut self) {
        self.refresh_peak_time();
        self.refresh_highest_consumer();
    }

    pub fn refresh_peak_time(&mut self) {
        let peak = analytics::estimate_peak_time(&mut self.rng);
        self.peak_time = Some(peak);
        self.view.set_peak_time(peak);
    }

    pub fn refresh_highest_consumer(&mut self) {
        match analytics::highest_consumer(&self.appliances) {
            Some(top) => {
                let power = watts(top.rated_power_watts);
                self.view.set_highest_consumer(top.name, &power);
            }
            None => {
                let none = self.locale.strings().none;
                self.view.set_highest_consumer(none, &watts(0));
            }
        }
    }

    /// Apply a keyboard or button action.
    pub fn dispatch(&mut self, action: InputAction) {
        match action {
            InputAction::Toggle(id) => {
                self.toggle_appliance(id);
            }
            InputAction::SwitchPeriod(period) => self.switch_period(period),
        }
    }

    pub fn total_power_consumption(&self) -> u32 {
        self.appliances.total_power_watts()
    }

    /// Total consumption with a random ±10% variation.
    pub fn simulated_consumption(&mut self) -> f64 {
        analytics::simulated_consumption(self.total_power_consumption(), &mut self.rng)
    }

    pub fn power_series(&self) -> PowerSeries {
        PowerSeries::for_period(self.current_period, self.locale)
    }

    pub fn appliance(&self, id: ApplianceId) -> &ApplianceState {
        self.appliances.get(id)
    }

    pub fn appliances(&self) -> &ApplianceTable {
        &self.appliances
    }

    pub fn current_period(&self) -> Period {
        self.current_period
    }

    /// Last displayed peak time, `None` before the first analytics refresh.
    pub fn peak_time(&self) -> Option<&'static str> {
        self.peak_time
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::create_bus;
    use crate::view::{SnapshotChart, SnapshotView};

    fn controller() -> DashboardController<SnapshotView, SnapshotChart> {
        let bus = create_bus();
        DashboardController::new(
            SnapshotView::new(bus.clone()),
            SnapshotChart::new(bus),
            Locale::ZhTw,
        )
        .with_rng(StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_mount_renders_baseline() {
        let mut c = controller();
        c.mount();
        let snap = c.view().snapshot();

        assert!(snap.is_active("refrigerator-status"));
        assert_eq!(snap.text("refrigerator-power"), Some("150W"));
        assert_eq!(snap.text("tv-power"), Some("0W"));
        assert_eq!(snap.text("tv-toggle"), Some("開啟"));
        assert!(snap.is_active("weekly-btn"));
        assert!(!snap.is_active("monthly-btn"));
        assert_eq!(snap.text("highest-consumer"), Some("冰箱"));
        assert_eq!(snap.text("highest-power"), Some("150W"));
        assert!(snap.text("currentTime").is_some());
        assert!(c.peak_time().is_some());
        assert_eq!(c.chart().current().unwrap().options.series[0].data.len(), 7);
    }

    #[test]
    fn test_toggle_updates_card_and_analytics() {
        let mut c = controller();
        c.mount();
        let state = c.toggle_appliance(ApplianceId::AirConditioner).clone();
        assert!(state.is_on);

        let snap = c.view().snapshot();
        assert_eq!(snap.text("air-conditioner-text"), Some("開啟"));
        assert_eq!(snap.text("air-conditioner-power"), Some("850W"));
        assert_eq!(snap.text("air-conditioner-toggle"), Some("關閉"));
        assert_eq!(snap.text("highest-consumer"), Some("冷氣"));
        assert_eq!(c.total_power_consumption(), 1000);
    }

    #[test]
    fn test_unknown_ids_are_rejected_without_side_effects() {
        let mut c = controller();
        c.mount();
        assert!(c.toggle_appliance_by_id("toaster").is_err());
        assert!(c.switch_period_by_id("yearly").is_err());
        assert_eq!(c.total_power_consumption(), 150);
        assert_eq!(c.current_period(), Period::Weekly);
    }

    #[test]
    fn test_dispatch_switches_period() {
        let mut c = controller();
        c.mount();
        c.dispatch(InputAction::SwitchPeriod(Period::Monthly));
        assert_eq!(c.current_period(), Period::Monthly);
        assert!(c.view().snapshot().is_active("monthly-btn"));
        assert!(!c.view().snapshot().is_active("weekly-btn"));
        assert_eq!(c.power_series().values.len(), 4);
    }
}
