//! Period selection and the two canned power-usage series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, IdentifierKind};
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Weekly, Period::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Element id of the selector button, e.g. `weekly-btn`.
    pub fn button_id(self) -> String {
        format!("{}-btn", self.as_str())
    }

    pub fn title(self, locale: Locale) -> &'static str {
        let strings = locale.strings();
        match self {
            Period::Weekly => strings.weekly_title,
            Period::Monthly => strings.monthly_title,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DashboardError::invalid(IdentifierKind::Period, s))
    }
}

static WEEKLY_KWH: [f64; 7] = [45.2, 52.8, 38.6, 61.4, 48.9, 67.3, 55.1];
static MONTHLY_KWH: [f64; 4] = [285.6, 312.4, 298.7, 324.8];

/// One row of the static usage table: category labels with parallel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSeries {
    pub categories: &'static [&'static str],
    pub values: &'static [f64],
}

impl PowerSeries {
    pub fn for_period(period: Period, locale: Locale) -> Self {
        let strings = locale.strings();
        match period {
            Period::Weekly => PowerSeries {
                categories: &strings.weekday_labels,
                values: &WEEKLY_KWH,
            },
            Period::Monthly => PowerSeries {
                categories: &strings.week_labels,
                values: &MONTHLY_KWH,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_are_parallel_and_non_negative() {
        for locale in [Locale::ZhTw, Locale::En] {
            for period in Period::ALL {
                let series = PowerSeries::for_period(period, locale);
                assert_eq!(series.categories.len(), series.values.len());
                assert!(series.values.iter().all(|v| *v >= 0.0));
            }
        }
    }

    #[test]
    fn test_monthly_series_literal() {
        let series = PowerSeries::for_period(Period::Monthly, Locale::ZhTw);
        assert_eq!(series.categories, ["第1週", "第2週", "第3週", "第4週"]);
        assert_eq!(series.values, [285.6, 312.4, 298.7, 324.8]);
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("monthly".parse::<Period>().unwrap(), Period::Monthly);
        assert!("yearly".parse::<Period>().is_err());
        assert_eq!(Period::Weekly.button_id(), "weekly-btn");
    }
}
