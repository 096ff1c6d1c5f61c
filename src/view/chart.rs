//! Declarative line-chart specification.
//!
//! Serializes to the Highcharts options object the dashboard page passes to
//! `Highcharts.chart(container, options)`.

use serde::Serialize;

use crate::locale::Locale;
use crate::power::{Period, PowerSeries};

const FONT_FAMILY: &str = "Segoe UI, Tahoma, Geneva, Verdana, sans-serif";
const TITLE_COLOR: &str = "#e2e8f0";
const LABEL_COLOR: &str = "#a0aec0";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const SERIES_COLOR: &str = "#4facfe";
const ANIMATION_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart: ChartOptions,
    pub title: Title,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub series: Vec<Series>,
    pub legend: Legend,
    pub tooltip: Tooltip,
    pub plot_options: PlotOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub kind: ChartType,
    pub background_color: &'static str,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
}

impl TextStyle {
    fn color(color: &'static str) -> Self {
        Self {
            color: Some(color),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Labels {
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub categories: Vec<String>,
    pub labels: Labels,
    pub grid_line_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub title: Title,
    pub labels: Labels,
    pub grid_line_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
    pub color: &'static str,
    pub line_width: u32,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub radius: u32,
    pub fill_color: &'static str,
    pub line_width: u32,
    pub line_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub item_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub line: LinePlotOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePlotOptions {
    pub animation: Animation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
}

impl ChartSpec {
    /// Power-usage trend line for `period`.
    pub fn power_usage(period: Period, locale: Locale) -> Self {
        let strings = locale.strings();
        let series = PowerSeries::for_period(period, locale);

        Self {
            chart: ChartOptions {
                kind: ChartType::Line,
                background_color: "transparent",
                style: TextStyle {
                    font_family: Some(FONT_FAMILY),
                    ..Default::default()
                },
            },
            title: Title {
                text: period.title(locale).to_string(),
                style: TextStyle {
                    color: Some(TITLE_COLOR),
                    font_size: Some("16px"),
                    ..Default::default()
                },
            },
            x_axis: XAxis {
                categories: series.categories.iter().map(|c| c.to_string()).collect(),
                labels: Labels {
                    style: TextStyle::color(LABEL_COLOR),
                },
                grid_line_color: GRID_COLOR,
            },
            y_axis: YAxis {
                title: Title {
                    text: strings.y_axis_title.to_string(),
                    style: TextStyle::color(LABEL_COLOR),
                },
                labels: Labels {
                    style: TextStyle::color(LABEL_COLOR),
                },
                grid_line_color: GRID_COLOR,
            },
            series: vec![Series {
                name: strings.series_name.to_string(),
                data: series.values.to_vec(),
                color: SERIES_COLOR,
                line_width: 3,
                marker: Marker {
                    radius: 6,
                    fill_color: SERIES_COLOR,
                    line_width: 2,
                    line_color: "#ffffff",
                },
            }],
            legend: Legend {
                item_style: TextStyle::color(LABEL_COLOR),
            },
            tooltip: Tooltip {
                background_color: "rgba(45, 55, 72, 0.9)",
                border_color: SERIES_COLOR,
                style: TextStyle::color("#ffffff"),
            },
            plot_options: PlotOptions {
                line: LinePlotOptions {
                    animation: Animation {
                        duration: ANIMATION_MS,
                    },
                },
            },
        }
    }

    pub fn kind(&self) -> ChartType {
        self.chart.kind
    }
}
