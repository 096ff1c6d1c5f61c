//! Smart Home Dashboard - Rust Implementation
//!
//! A dashboard for mock household appliances with simulated power-usage charts.
//!
//! This library provides:
//! - The dashboard controller (appliance toggles, period switching, analytics)
//! - View and chart collaborator traits, with a server-side snapshot implementation
//! - A runtime owning the recurring clock and analytics refreshes
//! - An HTTP API, Server-Sent Events and a server-rendered page (feature `server`)

pub mod analytics;
pub mod appliance;
pub mod bus;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod locale;
pub mod power;
pub mod runtime;
pub mod view;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod ui;

pub use appliance::{ApplianceId, ApplianceState};
pub use controller::DashboardController;
pub use error::DashboardError;
pub use locale::Locale;
pub use power::Period;
