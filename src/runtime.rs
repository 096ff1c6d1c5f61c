//! Dashboard runtime - owns the controller and its recurring refresh tasks.
//!
//! The controller sits behind a single async mutex. Input handlers and timer
//! ticks each take the lock, run one synchronous controller operation, and
//! release it, so no tick can observe a half-updated appliance table.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::controller::DashboardController;
use crate::view::{ChartRenderer, ViewSurface};

pub type SharedDashboard<V, C> = Arc<Mutex<DashboardController<V, C>>>;

/// Wrap a controller for sharing between handlers and recurring tasks.
pub fn share<V, C>(controller: DashboardController<V, C>) -> SharedDashboard<V, C> {
    Arc::new(Mutex::new(controller))
}

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Periods of the two recurring refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshIntervals {
    pub clock: Duration,
    pub analytics: Duration,
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self {
            clock: Duration::from_secs(1),
            analytics: Duration::from_secs(5),
        }
    }
}

/// A named task that runs `tick` every `period` until cancelled.
pub struct RecurringTask {
    name: &'static str,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RecurringTask {
    /// Spawn the task. The first tick fires one full `period` after spawning.
    /// Cancelling `parent` cancels the task too.
    pub fn spawn<F, Fut>(
        name: &'static str,
        period: Duration,
        parent: &CancellationToken,
        mut tick: F,
    ) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let cancel = parent.child_token();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("{}: cancelled", name);
                        break;
                    }
                    _ = ticker.tick() => tick().await,
                }
            }
        });

        debug!("{}: scheduled every {:?}", name, period);
        Self {
            name,
            cancel,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Request cancellation without waiting for the task to exit.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel and wait for the task to exit.
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            warn!("{}: task ended abnormally: {}", self.name, e);
        }
    }
}

/// A mounted dashboard with its clock and analytics refreshes running.
pub struct DashboardRuntime<V, C> {
    dashboard: SharedDashboard<V, C>,
    clock_task: RecurringTask,
    analytics_task: RecurringTask,
    shutdown: CancellationToken,
}

impl<V, C> DashboardRuntime<V, C>
where
    V: ViewSurface + Send + 'static,
    C: ChartRenderer + Send + 'static,
{
    /// Mount the controller and start both recurring refreshes.
    pub async fn launch(
        dashboard: SharedDashboard<V, C>,
        intervals: RefreshIntervals,
        shutdown: CancellationToken,
    ) -> Self {
        dashboard.lock().await.mount();

        let clock_task = {
            let dashboard = dashboard.clone();
            RecurringTask::spawn("clock", intervals.clock, &shutdown, move || {
                let dashboard = dashboard.clone();
                async move {
                    dashboard.lock().await.refresh_clock();
                }
            })
        };

        let analytics_task = {
            let dashboard = dashboard.clone();
            RecurringTask::spawn("analytics", intervals.analytics, &shutdown, move || {
                let dashboard = dashboard.clone();
                async move {
                    dashboard.lock().await.refresh_analytics();
                }
            })
        };

        info!(
            "Dashboard runtime started (clock {:?}, analytics {:?})",
            intervals.clock, intervals.analytics
        );

        Self {
            dashboard,
            clock_task,
            analytics_task,
            shutdown,
        }
    }

    pub fn dashboard(&self) -> &SharedDashboard<V, C> {
        &self.dashboard
    }

    pub fn tasks(&self) -> [&RecurringTask; 2] {
        [&self.clock_task, &self.analytics_task]
    }

    /// Cancel both refreshes and wait for them to exit.
    pub async fn shutdown(self) {
        info!("Stopping dashboard runtime...");
        self.shutdown.cancel();
        self.clock_task.stop().await;
        self.analytics_task.stop().await;
        info!("Dashboard runtime stopped");
    }
}
