//! Web UI handlers - the dashboard page
//!
//! The page is rendered server-side with Dioxus SSR from the controller's
//! current snapshot and kept live by the SSE stream (see `api::events_handler`).
//!
//! - components/ - Shared Dioxus components (layout, appliance card)
//! - pages/ - Page components

pub mod components;
pub mod pages;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use pages::{DashboardPage, PageModel};

/// GET / - Dashboard page
pub async fn dashboard_page(State(state): State<AppState>) -> impl IntoResponse {
    let lang = state.dashboard.lock().await.locale().tag();
    let model = PageModel::load(&state.dashboard).await;
    Html(render_document(lang, model))
}

/// Render the full HTML document for `model`.
pub fn render_document(lang: &str, model: PageModel) -> String {
    let html = dioxus::ssr::render_element(rsx! { DashboardPage { model } });
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\" data-theme=\"dark\">\n{}</html>",
        lang, html
    )
}
