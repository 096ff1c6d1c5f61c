//! Appliance identifiers and the fixed in-memory appliance table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, IdentifierKind};
use crate::locale::Locale;

/// One of the four controllable devices. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplianceId {
    AirConditioner,
    Light,
    Tv,
    Refrigerator,
}

impl ApplianceId {
    /// Insertion order. Ties in the highest-consumer ranking go to the earlier id.
    pub const ALL: [ApplianceId; 4] = [
        ApplianceId::AirConditioner,
        ApplianceId::Light,
        ApplianceId::Tv,
        ApplianceId::Refrigerator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplianceId::AirConditioner => "air-conditioner",
            ApplianceId::Light => "light",
            ApplianceId::Tv => "tv",
            ApplianceId::Refrigerator => "refrigerator",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn rated_power_watts(self) -> u32 {
        match self {
            ApplianceId::AirConditioner => 850,
            ApplianceId::Light => 60,
            ApplianceId::Tv => 200,
            ApplianceId::Refrigerator => 150,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ApplianceId::AirConditioner => "❄️",
            ApplianceId::Light => "💡",
            ApplianceId::Tv => "📺",
            ApplianceId::Refrigerator => "🧊",
        }
    }

    /// The refrigerator is the baseline always-on appliance.
    pub fn initially_on(self) -> bool {
        matches!(self, ApplianceId::Refrigerator)
    }

    /// Element id of one display facet, e.g. `tv-power`.
    pub fn element_id(self, facet: Facet) -> String {
        format!("{}-{}", self.as_str(), facet.suffix())
    }
}

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplianceId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplianceId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DashboardError::invalid(IdentifierKind::Appliance, s))
    }
}

/// The four visual facets of an appliance card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Status,
    Text,
    Power,
    Toggle,
}

impl Facet {
    fn suffix(self) -> &'static str {
        match self {
            Facet::Status => "status",
            Facet::Text => "text",
            Facet::Power => "power",
            Facet::Toggle => "toggle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceState {
    pub id: ApplianceId,
    pub name: &'static str,
    pub rated_power_watts: u32,
    pub is_on: bool,
    pub icon: &'static str,
}

impl ApplianceState {
    fn initial(id: ApplianceId, locale: Locale) -> Self {
        Self {
            id,
            name: locale.strings().appliance_names[id.index()],
            rated_power_watts: id.rated_power_watts(),
            is_on: id.initially_on(),
            icon: id.icon(),
        }
    }

    /// Watts this appliance currently draws.
    pub fn current_watts(&self) -> u32 {
        if self.is_on {
            self.rated_power_watts
        } else {
            0
        }
    }
}

/// Fixed-size appliance table, always holding exactly the four ids in
/// insertion order.
#[derive(Debug, Clone)]
pub struct ApplianceTable {
    entries: [ApplianceState; 4],
}

impl ApplianceTable {
    pub fn new(locale: Locale) -> Self {
        Self {
            entries: ApplianceId::ALL.map(|id| ApplianceState::initial(id, locale)),
        }
    }

    pub fn get(&self, id: ApplianceId) -> &ApplianceState {
        &self.entries[id.index()]
    }

    /// Flip the on/off flag and return the new value.
    pub fn toggle(&mut self, id: ApplianceId) -> bool {
        let entry = &mut self.entries[id.index()];
        entry.is_on = !entry.is_on;
        entry.is_on
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApplianceState> {
        self.entries.iter()
    }

    /// Sum of rated watts over the appliances that are on.
    pub fn total_power_watts(&self) -> u32 {
        self.iter().map(ApplianceState::current_watts).sum()
    }
}
