//! Recording collaborators for controller integration testing
//!
//! These stand in for the page and the charting library, recording every call
//! the controller makes so tests can assert on exactly what was displayed.
#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};

use smart_home_dashboard::clock::Clock;
use smart_home_dashboard::view::{ChartRenderer, ChartSpec, ViewSurface};
use smart_home_dashboard::{ApplianceId, Period};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Indicator(ApplianceId, bool),
    StatusText(ApplianceId, String),
    Power(ApplianceId, String),
    Toggle(ApplianceId, String, bool),
    Clock(String),
    PeriodButton(Period, bool),
    PeakTime(String),
    HighestConsumer(String, String),
}

/// The four facets written by one render of an appliance card.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub indicator: bool,
    pub status_text: String,
    pub power: String,
    pub toggle_label: String,
    pub toggle_active: bool,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    /// Every completed card render for `id`, oldest first.
    pub fn renders(&self, id: ApplianceId) -> Vec<RenderedCard> {
        let mut renders = Vec::new();
        let (mut indicator, mut status, mut power) = (None, None, None);
        for call in &self.calls {
            match call {
                ViewCall::Indicator(i, v) if *i == id => indicator = Some(*v),
                ViewCall::StatusText(i, v) if *i == id => status = Some(v.clone()),
                ViewCall::Power(i, v) if *i == id => power = Some(v.clone()),
                ViewCall::Toggle(i, label, active) if *i == id => {
                    renders.push(RenderedCard {
                        indicator: indicator.take().expect("indicator before toggle"),
                        status_text: status.take().expect("status before toggle"),
                        power: power.take().expect("power before toggle"),
                        toggle_label: label.clone(),
                        toggle_active: *active,
                    });
                }
                _ => {}
            }
        }
        renders
    }

    pub fn peak_times(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::PeakTime(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clock_writes(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Clock(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_highest_consumer(&self) -> Option<(String, String)> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::HighestConsumer(name, power) => Some((name.clone(), power.clone())),
            _ => None,
        })
    }

    /// Active flags of the period buttons from the most recent write of each.
    pub fn period_buttons(&self) -> Vec<(Period, bool)> {
        Period::ALL
            .into_iter()
            .filter_map(|period| {
                self.calls.iter().rev().find_map(|c| match c {
                    ViewCall::PeriodButton(p, active) if *p == period => Some((period, *active)),
                    _ => None,
                })
            })
            .collect()
    }
}

impl ViewSurface for RecordingView {
    fn set_status_indicator(&mut self, id: ApplianceId, active: bool) {
        self.calls.push(ViewCall::Indicator(id, active));
    }

    fn set_status_text(&mut self, id: ApplianceId, text: &str) {
        self.calls.push(ViewCall::StatusText(id, text.to_string()));
    }

    fn set_power_readout(&mut self, id: ApplianceId, text: &str) {
        self.calls.push(ViewCall::Power(id, text.to_string()));
    }

    fn set_toggle_control(&mut self, id: ApplianceId, label: &str, active: bool) {
        self.calls.push(ViewCall::Toggle(id, label.to_string(), active));
    }

    fn set_clock(&mut self, text: &str) {
        self.calls.push(ViewCall::Clock(text.to_string()));
    }

    fn set_period_button(&mut self, period: Period, active: bool) {
        self.calls.push(ViewCall::PeriodButton(period, active));
    }

    fn set_peak_time(&mut self, text: &str) {
        self.calls.push(ViewCall::PeakTime(text.to_string()));
    }

    fn set_highest_consumer(&mut self, name: &str, power: &str) {
        self.calls
            .push(ViewCall::HighestConsumer(name.to_string(), power.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingChart {
    pub draws: Vec<(String, ChartSpec)>,
}

impl RecordingChart {
    pub fn last(&self) -> &ChartSpec {
        &self.draws.last().expect("at least one draw").1
    }
}

impl ChartRenderer for RecordingChart {
    fn draw(&mut self, container: &str, spec: &ChartSpec) {
        self.draws.push((container.to_string(), spec.clone()));
    }
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let t = Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .expect("valid local time");
        FixedClock(t)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
