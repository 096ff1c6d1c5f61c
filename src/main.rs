//! Smart Home Dashboard - Rust Implementation
//!
//! Serves the dashboard page, its API and the live event stream.

use smart_home_dashboard::{api, bus, config, runtime, view, DashboardController};

use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_home_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Smart Home Dashboard v{} ({})",
        env!("SHD_VERSION"),
        env!("SHD_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, locale: {}",
        config.port,
        config.locale.tag()
    );

    // Create event bus
    let bus = bus::create_bus();
    tracing::info!("Event bus initialized");

    // Build the controller and start its recurring refreshes
    let controller = DashboardController::new(
        view::SnapshotView::new(bus.clone()),
        view::SnapshotChart::new(bus.clone()),
        config.locale,
    );
    let shutdown = CancellationToken::new();
    let dashboard = runtime::DashboardRuntime::launch(
        runtime::share(controller),
        config.refresh.intervals(),
        shutdown.clone(),
    )
    .await;

    let state = api::AppState::new(dashboard.dashboard().clone(), bus.clone(), shutdown.clone());
    let app = api::router(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    dashboard.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM), then cancel `shutdown`
/// so open event streams and recurring tasks end.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }

    shutdown.cancel();
}
