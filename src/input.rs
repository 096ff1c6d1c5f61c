//! Keyboard shortcuts.
//!
//! An alternate path to the same handlers the buttons use; no extra state.

use serde::Serialize;

use crate::appliance::ApplianceId;
use crate::power::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum InputAction {
    Toggle(ApplianceId),
    SwitchPeriod(Period),
}

/// Key → action bindings, in the order they are listed on the page.
pub const SHORTCUTS: [(&str, InputAction); 6] = [
    ("1", InputAction::Toggle(ApplianceId::AirConditioner)),
    ("2", InputAction::Toggle(ApplianceId::Light)),
    ("3", InputAction::Toggle(ApplianceId::Tv)),
    ("4", InputAction::Toggle(ApplianceId::Refrigerator)),
    ("w", InputAction::SwitchPeriod(Period::Weekly)),
    ("m", InputAction::SwitchPeriod(Period::Monthly)),
];

impl InputAction {
    /// Unbound keys yield `None` and are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        SHORTCUTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| *action)
    }
}
