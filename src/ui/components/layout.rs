//! Layout component wrapping the dashboard page with Pico CSS and common elements.

use dioxus::prelude::*;

/// Shared JavaScript utilities
const SHARED_JS: &str = r#"
async function post(url) {
    try {
        const res = await fetch(url, { method: 'POST' });
        if (!res.ok && res.status !== 204) console.warn('Request failed:', url, res.status);
    } catch (e) { console.error('Request error:', url, e); }
}
"#;

/// CSS styles for the dashboard (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.dashboard-header { display: flex; justify-content: space-between; align-items: baseline; }
.appliance-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.appliance-card { text-align: center; transition: transform 0.15s; }
.appliance-card:active { transform: scale(0.95); }
.appliance-icon { font-size: 2.5rem; }
.status-row { display: flex; justify-content: center; align-items: center; gap: 0.5rem; }
.status-indicator { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: var(--pico-del-color); }
.status-indicator.active { background: var(--pico-ins-color); box-shadow: 0 0 8px var(--pico-ins-color); }
.power-readout { font-size: 1.5rem; font-weight: bold; }
.toggle-btn, .period-btn { margin: 0; transition: transform 0.1s; }
.toggle-btn:active, .period-btn:active { transform: scale(0.95); }
.toggle-btn.active, .period-btn.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.period-selector { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.analytics { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
#powerChart { min-height: 360px; }
small { color: var(--pico-muted-color); }
"#;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const HIGHCHARTS_JS: &str = "https://code.highcharts.com/highcharts.js";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping the page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("SHD_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title}" }
            link { rel: "stylesheet", href: PICO_CSS }
            style { {CUSTOM_STYLES} }
            script { src: HIGHCHARTS_JS }
            script { dangerous_inner_html: SHARED_JS }
        }
        body {
            main { class: "container dashboard",
                {props.children}
            }
            footer { class: "container",
                small { "Smart Home Dashboard v{version}" }
            }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
