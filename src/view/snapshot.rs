//! Server-side view surface.
//!
//! Keeps the last written state of every element so pages can be rendered
//! from it, and pushes each actual change onto the event bus for connected
//! pages to patch their DOM.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ids, ChartRenderer, ChartSpec, ViewSurface};
use crate::appliance::{ApplianceId, Facet};
use crate::bus::{DashboardEvent, SharedBus};
use crate::power::Period;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementState {
    pub text: Option<String>,
    pub active: bool,
}

/// Element id → last written state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    elements: BTreeMap<String, ElementState>,
}

impl DashboardSnapshot {
    pub fn get(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.text.as_deref())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.active)
    }

    /// Returns true if the stored text changed.
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let entry = self.elements.entry(id.to_string()).or_default();
        if entry.text.as_deref() == Some(text) {
            return false;
        }
        entry.text = Some(text.to_string());
        true
    }

    /// Returns true if the stored flag changed.
    fn set_active(&mut self, id: &str, active: bool) -> bool {
        let entry = self.elements.entry(id.to_string()).or_default();
        if entry.active == active {
            return false;
        }
        entry.active = active;
        true
    }
}

pub struct SnapshotView {
    snapshot: DashboardSnapshot,
    bus: SharedBus,
}

impl SnapshotView {
    pub fn new(bus: SharedBus) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            bus,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    fn write_text(&mut self, id: &str, text: &str) {
        if self.snapshot.set_text(id, text) {
            self.bus.publish(DashboardEvent::ElementText {
                id: id.to_string(),
                text: text.to_string(),
            });
        }
    }

    fn write_active(&mut self, id: &str, active: bool) {
        if self.snapshot.set_active(id, active) {
            self.bus.publish(DashboardEvent::ElementActive {
                id: id.to_string(),
                active,
            });
        }
    }
}

impl ViewSurface for SnapshotView {
    fn set_status_indicator(&mut self, id: ApplianceId, active: bool) {
        self.write_active(&id.element_id(Facet::Status), active);
    }

    fn set_status_text(&mut self, id: ApplianceId, text: &str) {
        self.write_text(&id.element_id(Facet::Text), text);
    }

    fn set_power_readout(&mut self, id: ApplianceId, text: &str) {
        self.write_text(&id.element_id(Facet::Power), text);
    }

    fn set_toggle_control(&mut self, id: ApplianceId, label: &str, active: bool) {
        let element = id.element_id(Facet::Toggle);
        self.write_text(&element, label);
        self.write_active(&element, active);
    }

    fn set_clock(&mut self, text: &str) {
        self.write_text(ids::CURRENT_TIME, text);
    }

    fn set_period_button(&mut self, period: Period, active: bool) {
        self.write_active(&period.button_id(), active);
    }

    fn set_peak_time(&mut self, text: &str) {
        self.write_text(ids::PEAK_TIME, text);
    }

    fn set_highest_consumer(&mut self, name: &str, power: &str) {
        self.write_text(ids::HIGHEST_CONSUMER, name);
        self.write_text(ids::HIGHEST_POWER, power);
    }
}

/// A chart as last handed to the charting library.
#[derive(Debug, Clone, Serialize)]
pub struct DrawnChart {
    pub container: String,
    pub options: ChartSpec,
}

/// Server-side chart collaborator: remembers the last chart and forwards it
/// to pages, which own the actual rendering.
pub struct SnapshotChart {
    current: Option<DrawnChart>,
    bus: SharedBus,
}

impl SnapshotChart {
    pub fn new(bus: SharedBus) -> Self {
        Self { current: None, bus }
    }

    pub fn current(&self) -> Option<&DrawnChart> {
        self.current.as_ref()
    }
}

impl ChartRenderer for SnapshotChart {
    fn draw(&mut self, container: &str, spec: &ChartSpec) {
        self.current = Some(DrawnChart {
            container: container.to_string(),
            options: spec.clone(),
        });
        self.bus.publish(DashboardEvent::ChartDrawn {
            container: container.to_string(),
            options: spec.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::create_bus;
    use crate::locale::Locale;

    #[test]
    fn test_unchanged_writes_are_not_republished() {
        let bus = create_bus();
        let mut rx = bus.subscribe();
        let mut view = SnapshotView::new(bus);

        view.set_peak_time("19:00-21:00");
        view.set_peak_time("19:00-21:00");
        view.set_status_indicator(ApplianceId::Tv, false);

        assert!(matches!(
            rx.try_recv().unwrap(),
            DashboardEvent::ElementText { .. }
        ));
        assert!(rx.try_recv().is_err());
        assert_eq!(view.snapshot().text(ids::PEAK_TIME), Some("19:00-21:00"));
    }

    #[test]
    fn test_toggle_control_writes_label_and_flag() {
        let mut view = SnapshotView::new(create_bus());
        view.set_toggle_control(ApplianceId::Light, "關閉", true);

        let state = view.snapshot().get("light-toggle").unwrap();
        assert_eq!(state.text.as_deref(), Some("關閉"));
        assert!(state.active);
    }

    #[test]
    fn test_chart_publishes_every_draw() {
        let bus = create_bus();
        let mut rx = bus.subscribe();
        let mut chart = SnapshotChart::new(bus);
        let spec = ChartSpec::power_usage(Period::Weekly, Locale::En);

        chart.draw(ids::POWER_CHART, &spec);
        chart.draw(ids::POWER_CHART, &spec);

        assert!(matches!(rx.try_recv().unwrap(), DashboardEvent::ChartDrawn { .. }));
        assert!(matches!(rx.try_recv().unwrap(), DashboardEvent::ChartDrawn { .. }));
        assert_eq!(chart.current().unwrap().container, "powerChart");
    }
}
