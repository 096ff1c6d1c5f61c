//! Shared UI components for the Dioxus-based web UI.

pub mod appliance_card;
pub mod layout;

pub use appliance_card::{ApplianceCard, CardModel};
pub use layout::Layout;
