//! Display strings and clock formatting per locale.
//!
//! Every user-visible string the controller writes comes from a [`Strings`]
//! table so the core never hardcodes a language.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW", alias = "zh-tw", alias = "zh_TW")]
    ZhTw,
    #[serde(rename = "en", alias = "en-US")]
    En,
}

/// Static string table for one locale.
#[derive(Debug)]
pub struct Strings {
    pub page_title: &'static str,
    /// Status text while an appliance runs
    pub status_on: &'static str,
    pub status_off: &'static str,
    /// Toggle label offering to switch on
    pub action_turn_on: &'static str,
    /// Toggle label offering to switch off
    pub action_turn_off: &'static str,
    pub weekly_title: &'static str,
    pub monthly_title: &'static str,
    pub weekly_button: &'static str,
    pub monthly_button: &'static str,
    pub y_axis_title: &'static str,
    pub series_name: &'static str,
    pub none: &'static str,
    pub peak_time_label: &'static str,
    pub highest_consumer_label: &'static str,
    /// Appliance names in [`crate::appliance::ApplianceId::ALL`] order
    pub appliance_names: [&'static str; 4],
    pub weekday_labels: [&'static str; 7],
    pub week_labels: [&'static str; 4],
}

static ZH_TW: Strings = Strings {
    page_title: "智慧家庭電器儀表板",
    status_on: "開啟",
    status_off: "關閉",
    action_turn_on: "開啟",
    action_turn_off: "關閉",
    weekly_title: "本週用電量趨勢",
    monthly_title: "本月用電量趨勢",
    weekly_button: "本週",
    monthly_button: "本月",
    y_axis_title: "用電量 (kWh)",
    series_name: "用電量",
    none: "無",
    peak_time_label: "最高用電時段",
    highest_consumer_label: "最高耗電家電",
    appliance_names: ["冷氣", "燈光", "電視", "冰箱"],
    weekday_labels: ["週一", "週二", "週三", "週四", "週五", "週六", "週日"],
    week_labels: ["第1週", "第2週", "第3週", "第4週"],
};

static EN: Strings = Strings {
    page_title: "Smart Home Dashboard",
    status_on: "On",
    status_off: "Off",
    action_turn_on: "Turn on",
    action_turn_off: "Turn off",
    weekly_title: "Power usage this week",
    monthly_title: "Power usage this month",
    weekly_button: "Weekly",
    monthly_button: "Monthly",
    y_axis_title: "Power usage (kWh)",
    series_name: "Power usage",
    none: "None",
    peak_time_label: "Peak usage time",
    highest_consumer_label: "Highest consumer",
    appliance_names: ["Air Conditioner", "Light", "TV", "Refrigerator"],
    weekday_labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    week_labels: ["Week 1", "Week 2", "Week 3", "Week 4"],
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::ZhTw => &ZH_TW,
            Locale::En => &EN,
        }
    }

    /// BCP 47 tag, used for the page `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }

    /// Format a timestamp for the clock display.
    ///
    /// All fields are two-digit except the year; hours use the 12-hour clock.
    pub fn format_clock<Tz: TimeZone>(self, now: &DateTime<Tz>) -> String {
        let (is_pm, hour) = now.hour12();
        match self {
            Locale::ZhTw => format!(
                "{}/{:02}/{:02} {}{:02}:{:02}:{:02}",
                now.year(),
                now.month(),
                now.day(),
                if is_pm { "下午" } else { "上午" },
                hour,
                now.minute(),
                now.second()
            ),
            Locale::En => format!(
                "{:02}/{:02}/{}, {:02}:{:02}:{:02} {}",
                now.month(),
                now.day(),
                now.year(),
                hour,
                now.minute(),
                now.second(),
                if is_pm { "PM" } else { "AM" }
            ),
        }
    }
}
