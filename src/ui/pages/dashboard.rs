//! Dashboard page component.
//!
//! Renders the controller's last written state. The client script then acts
//! as a thin DOM patcher: buttons and keys POST to the API, and SSE events
//! replace text, toggle the `active` class, or redraw the chart.

use dioxus::prelude::*;

use crate::api::ServerDashboard;
use crate::input::SHORTCUTS;
use crate::power::Period;
use crate::ui::components::{ApplianceCard, CardModel, Layout};
use crate::view::{ids, DashboardSnapshot};

/// Client-side JavaScript for the Dashboard page.
const DASHBOARD_SCRIPT: &str = r#"
function drawChart(container, options) {
    if (window.Highcharts) Highcharts.chart(container, options);
}

document.querySelectorAll('.toggle-btn').forEach(btn => {
    btn.addEventListener('click', () => post(`/api/appliances/${btn.dataset.appliance}/toggle`));
});
document.querySelectorAll('.period-btn').forEach(btn => {
    btn.addEventListener('click', () => post(`/api/period/${btn.dataset.period}`));
});
document.addEventListener('keydown', (e) => {
    if (e.ctrlKey || e.metaKey || e.altKey || e.key.length !== 1) return;
    post(`/api/keys/${encodeURIComponent(e.key)}`);
});

fetch('/api/chart')
    .then(r => r.ok ? r.json() : null)
    .then(c => { if (c) drawChart(c.container, c.options); })
    .catch(e => console.error('Chart load error:', e));

const es = new EventSource('/events');
es.onmessage = (e) => {
    try {
        const event = JSON.parse(e.data);
        const p = event.payload;
        switch (event.type) {
            case 'ElementText': {
                const el = document.getElementById(p.id);
                if (el) el.textContent = p.text;
                break;
            }
            case 'ElementActive': {
                const el = document.getElementById(p.id);
                if (el) el.classList.toggle('active', p.active);
                break;
            }
            case 'ChartDrawn':
                drawChart(p.container, p.options);
                break;
        }
    } catch (err) { console.error('SSE parse error:', err); }
};
es.onerror = () => console.warn('SSE disconnected, retrying...');
"#;

/// Everything the page shows, read from the controller under its lock.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub title: &'static str,
    pub clock: String,
    pub cards: Vec<CardModel>,
    pub periods: Vec<PeriodButton>,
    pub peak_time_label: &'static str,
    pub peak_time: String,
    pub highest_consumer_label: &'static str,
    pub highest_consumer: String,
    pub highest_power: String,
    pub shortcuts: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodButton {
    pub id: String,
    pub period: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl PageModel {
    pub async fn load(dashboard: &ServerDashboard) -> Self {
        let dashboard = dashboard.lock().await;
        let strings = dashboard.locale().strings();
        let snapshot: &DashboardSnapshot = dashboard.view().snapshot();
        let text = |id: &str| snapshot.text(id).unwrap_or_default().to_string();

        let periods = Period::ALL
            .into_iter()
            .map(|period| PeriodButton {
                id: period.button_id(),
                period: period.as_str(),
                label: match period {
                    Period::Weekly => strings.weekly_button,
                    Period::Monthly => strings.monthly_button,
                },
                active: snapshot.is_active(&period.button_id()),
            })
            .collect();

        let shortcuts = SHORTCUTS
            .iter()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            title: strings.page_title,
            clock: text(ids::CURRENT_TIME),
            cards: dashboard
                .appliances()
                .iter()
                .map(|a| CardModel::from_snapshot(a, snapshot))
                .collect(),
            periods,
            peak_time_label: strings.peak_time_label,
            peak_time: text(ids::PEAK_TIME),
            highest_consumer_label: strings.highest_consumer_label,
            highest_consumer: text(ids::HIGHEST_CONSUMER),
            highest_power: text(ids::HIGHEST_POWER),
            shortcuts,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub model: PageModel,
}

/// Dashboard page component.
#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    let model = props.model;

    rsx! {
        Layout {
            title: model.title.to_string(),
            scripts: Some(DASHBOARD_SCRIPT.to_string()),

            header { class: "dashboard-header",
                h1 { "{model.title}" }
                span { id: ids::CURRENT_TIME, "{model.clock}" }
            }

            section { class: "appliance-grid",
                for card in model.cards.iter() {
                    ApplianceCard { key: "{card.id}", card: card.clone() }
                }
            }

            section {
                div { class: "period-selector",
                    for btn in model.periods.iter() {
                        button {
                            id: "{btn.id}",
                            class: if btn.active { "period-btn active" } else { "period-btn" },
                            "data-period": btn.period,
                            "{btn.label}"
                        }
                    }
                }
                article { id: ids::POWER_CHART }
            }

            section { class: "analytics",
                article {
                    h4 { "{model.peak_time_label}" }
                    p { id: ids::PEAK_TIME, "{model.peak_time}" }
                }
                article {
                    h4 { "{model.highest_consumer_label}" }
                    p { id: ids::HIGHEST_CONSUMER, "{model.highest_consumer}" }
                    p { id: ids::HIGHEST_POWER, "{model.highest_power}" }
                }
            }

            p { small { "Shortcuts: {model.shortcuts}" } }
        }
    }
}
