#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Recurring refresh tests
//!
//! Runs the dashboard runtime on a paused tokio clock so tick counts are exact.

mod mock_view;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio_util::sync::CancellationToken;

use mock_view::{FixedClock, RecordingChart, RecordingView};
use smart_home_dashboard::analytics::PEAK_TIMES;
use smart_home_dashboard::runtime::{self, DashboardRuntime, RecurringTask, RefreshIntervals};
use smart_home_dashboard::{ApplianceId, DashboardController, Locale};

async fn launch(shutdown: &CancellationToken) -> DashboardRuntime<RecordingView, RecordingChart> {
    let controller = DashboardController::new(
        RecordingView::default(),
        RecordingChart::default(),
        Locale::ZhTw,
    )
    .with_clock(FixedClock::at(2025, 1, 5, 15, 4, 5))
    .with_rng(StdRng::seed_from_u64(5));

    DashboardRuntime::launch(
        runtime::share(controller),
        RefreshIntervals::default(),
        shutdown.clone(),
    )
    .await
}

/// (clock writes, peak-time writes) seen so far.
async fn counts(runtime: &DashboardRuntime<RecordingView, RecordingChart>) -> (usize, usize) {
    let dashboard = runtime.dashboard().lock().await;
    (
        dashboard.view().clock_writes().len(),
        dashboard.view().peak_times().len(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_refresh_cadence() {
    let shutdown = CancellationToken::new();
    let runtime = launch(&shutdown).await;

    // Mount writes each once.
    assert_eq!(counts(&runtime).await, (1, 1));

    let names: Vec<_> = runtime.tasks().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["clock", "analytics"]);
    assert!(runtime.tasks().iter().all(|t| !t.is_finished()));

    tokio::time::sleep(Duration::from_millis(5500)).await;

    // Clock at 1..=5s, analytics at 5s.
    assert_eq!(counts(&runtime).await, (6, 2));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(counts(&runtime).await, (11, 3));

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_ticks_stop_after_shutdown() {
    let shutdown = CancellationToken::new();
    let runtime = launch(&shutdown).await;
    let dashboard = runtime.dashboard().clone();

    tokio::time::sleep(Duration::from_millis(2500)).await;
    runtime.shutdown().await;
    assert!(shutdown.is_cancelled());

    let before = dashboard.lock().await.view().calls.len();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(dashboard.lock().await.view().calls.len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_analytics_tick_reflects_latest_toggle() {
    let shutdown = CancellationToken::new();
    let runtime = launch(&shutdown).await;

    tokio::time::sleep(Duration::from_millis(1200)).await;
    runtime
        .dashboard()
        .lock()
        .await
        .toggle_appliance(ApplianceId::AirConditioner);

    tokio::time::sleep(Duration::from_secs(4)).await;
    {
        let dashboard = runtime.dashboard().lock().await;
        let view = dashboard.view();
        assert_eq!(
            view.last_highest_consumer(),
            Some(("冷氣".to_string(), "850W".to_string()))
        );
        // mount + toggle + one tick
        assert_eq!(view.peak_times().len(), 3);
        assert!(view
            .peak_times()
            .iter()
            .all(|p| PEAK_TIMES.contains(&p.as_str())));
        // The clock never touches the chart.
        assert_eq!(dashboard.chart().draws.len(), 1);
    }

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_recurring_task_first_tick_after_one_period() {
    let parent = CancellationToken::new();
    let ticks = Arc::new(AtomicUsize::new(0));

    let task = {
        let ticks = ticks.clone();
        RecurringTask::spawn("counter", Duration::from_secs(2), &parent, move || {
            let ticks = ticks.clone();
            async move {
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        })
    };
    assert_eq!(task.name(), "counter");

    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 1);

    task.stop().await;
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
    assert!(!parent.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_parent_cancellation_ends_task() {
    let parent = CancellationToken::new();
    let task = RecurringTask::spawn("idle", Duration::from_secs(1), &parent, || async {});

    parent.cancel();
    for _ in 0..10 {
        if task.is_finished() {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(task.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_is_idempotent() {
    let parent = CancellationToken::new();
    let task = RecurringTask::spawn("twice", Duration::from_secs(1), &parent, || async {});

    task.cancel();
    task.cancel();
    task.stop().await;
}
