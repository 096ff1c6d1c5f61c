//! HTTP API handlers

use std::convert::Infallible;
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::Stream;
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tokio_util::sync::CancellationToken;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::appliance::ApplianceState;
use crate::bus::SharedBus;
use crate::error::DashboardError;
use crate::input::InputAction;
use crate::power::Period;
use crate::runtime::SharedDashboard;
use crate::ui;
use crate::view::{SnapshotChart, SnapshotView};

/// Controller as hosted by the server.
pub type ServerDashboard = SharedDashboard<SnapshotView, SnapshotChart>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: ServerDashboard,
    pub bus: SharedBus,
    /// Ends open event streams so graceful shutdown can complete
    pub shutdown: CancellationToken,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(dashboard: ServerDashboard, bus: SharedBus, shutdown: CancellationToken) -> Self {
        Self {
            dashboard,
            bus,
            shutdown,
            started_at: Instant::now(),
        }
    }
}

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Web UI
        .route("/", get(ui::dashboard_page))
        // Health check
        .route("/status", get(status_handler))
        // Dashboard state
        .route("/api/state", get(state_handler))
        .route("/api/chart", get(chart_handler))
        // Input surface
        .route("/api/appliances/{id}/toggle", post(toggle_handler))
        .route("/api/period/{period}", post(period_handler))
        .route("/api/keys/{key}", post(key_handler))
        // Event stream (SSE)
        .route("/events", get(events_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn rejected(err: DashboardError) -> Response {
    warn!("Rejected input: {}", err);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub bus_subscribers: usize,
    pub total_power_watts: u32,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let total_power_watts = state.dashboard.lock().await.total_power_consumption();

    Json(StatusResponse {
        service: "smart-home-dashboard",
        version: env!("SHD_VERSION"),
        git_sha: env!("SHD_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        bus_subscribers: state.bus.subscriber_count(),
        total_power_watts,
    })
}

/// Current dashboard state
#[derive(Serialize)]
pub struct StateResponse {
    pub appliances: Vec<ApplianceState>,
    pub period: Period,
    pub total_power_watts: u32,
    pub peak_time: Option<&'static str>,
    pub locale: &'static str,
}

/// GET /api/state - Appliances, period and analytics
pub async fn state_handler(State(state): State<AppState>) -> Json<StateResponse> {
    let dashboard = state.dashboard.lock().await;

    Json(StateResponse {
        appliances: dashboard.appliances().iter().cloned().collect(),
        period: dashboard.current_period(),
        total_power_watts: dashboard.total_power_consumption(),
        peak_time: dashboard.peak_time(),
        locale: dashboard.locale().tag(),
    })
}

/// GET /api/chart - Last drawn chart (container + Highcharts options)
pub async fn chart_handler(State(state): State<AppState>) -> Response {
    let chart = state.dashboard.lock().await.chart().current().cloned();
    match chart {
        Some(chart) => (StatusCode::OK, Json(chart)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No chart drawn yet".to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/appliances/{id}/toggle - Flip one appliance
pub async fn toggle_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = state
        .dashboard
        .lock()
        .await
        .toggle_appliance_by_id(&id)
        .cloned();
    match result {
        Ok(appliance) => (StatusCode::OK, Json(appliance)).into_response(),
        Err(e) => rejected(e),
    }
}

#[derive(Serialize)]
pub struct PeriodResponse {
    pub period: Period,
}

/// POST /api/period/{period} - Switch the chart period
pub async fn period_handler(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Response {
    let mut dashboard = state.dashboard.lock().await;
    match dashboard.switch_period_by_id(&period) {
        Ok(()) => (
            StatusCode::OK,
            Json(PeriodResponse {
                period: dashboard.current_period(),
            }),
        )
            .into_response(),
        Err(e) => rejected(e),
    }
}

#[derive(Serialize)]
pub struct KeyResponse {
    pub key: String,
    #[serde(flatten)]
    pub action: InputAction,
}

/// POST /api/keys/{key} - Keyboard shortcut (unbound keys are ignored)
pub async fn key_handler(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let Some(action) = InputAction::from_key(&key) else {
        debug!("Ignoring unbound key {:?}", key);
        return StatusCode::NO_CONTENT.into_response();
    };

    state.dashboard.lock().await.dispatch(action);
    (StatusCode::OK, Json(KeyResponse { key, action })).into_response()
}

/// GET /events - Server-Sent Events stream of view updates
pub async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.bus.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| {
        match result {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(json) => Some(Ok(Event::default().data(json))),
                Err(_) => None,
            },
            Err(_) => None, // Skip lagged messages
        }
    });
    let stream = futures::StreamExt::take_until(stream, state.shutdown.cancelled_owned());

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
