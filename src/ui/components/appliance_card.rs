//! Appliance card: icon, name, status indicator, power readout and toggle.

use dioxus::prelude::*;

use crate::appliance::{ApplianceState, Facet};
use crate::input::{InputAction, SHORTCUTS};
use crate::view::DashboardSnapshot;

/// Card contents as last written by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub indicator_active: bool,
    pub status_text: String,
    pub power_text: String,
    pub toggle_label: String,
    pub toggle_active: bool,
    pub shortcut: Option<&'static str>,
}

impl CardModel {
    pub fn from_snapshot(state: &ApplianceState, snapshot: &DashboardSnapshot) -> Self {
        let text = |facet| {
            snapshot
                .text(&state.id.element_id(facet))
                .unwrap_or_default()
                .to_string()
        };
        let shortcut = SHORTCUTS
            .iter()
            .find(|(_, action)| *action == InputAction::Toggle(state.id))
            .map(|(key, _)| *key);

        Self {
            id: state.id.as_str(),
            icon: state.icon,
            name: state.name,
            indicator_active: snapshot.is_active(&state.id.element_id(Facet::Status)),
            status_text: text(Facet::Text),
            power_text: text(Facet::Power),
            toggle_label: text(Facet::Toggle),
            toggle_active: snapshot.is_active(&state.id.element_id(Facet::Toggle)),
            shortcut,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ApplianceCardProps {
    pub card: CardModel,
}

#[component]
pub fn ApplianceCard(props: ApplianceCardProps) -> Element {
    let card = props.card;

    rsx! {
        article { class: "appliance-card",
            div { class: "appliance-icon", "{card.icon}" }
            h3 { "{card.name}" }
            div { class: "status-row",
                div {
                    id: "{card.id}-status",
                    class: if card.indicator_active { "status-indicator active" } else { "status-indicator" },
                }
                span { id: "{card.id}-text", "{card.status_text}" }
            }
            p { class: "power-readout", id: "{card.id}-power", "{card.power_text}" }
            button {
                id: "{card.id}-toggle",
                class: if card.toggle_active { "toggle-btn active" } else { "toggle-btn" },
                "data-appliance": card.id,
                "{card.toggle_label}"
            }
            if let Some(key) = card.shortcut {
                p { small { "[{key}]" } }
            }
        }
    }
}
