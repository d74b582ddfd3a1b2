//! Periodic timer refresh
//!
//! Recomputes every active timer on a fixed cadence (one minute by default)
//! until the shutdown token fires.

use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use super::TimerStore;

/// Refresh loop over a [`TimerStore`]
pub struct Refresher {
    store: TimerStore,
    period: Duration,
    shutdown: CancellationToken,
}

impl Refresher {
    /// Default refresh cadence
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(store: TimerStore, period: Duration, shutdown: CancellationToken) -> Self {
        Self {
            store,
            // tokio intervals panic on a zero period
            period: if period.is_zero() { Self::DEFAULT_INTERVAL } else { period },
            shutdown,
        }
    }

    /// 主循环：每个周期刷新一次，收到 shutdown 后退出
    pub async fn run(self) {
        tracing::info!(period_secs = self.period.as_secs(), "Timer refresher started");

        // First tick one full period after start; a fresh timer is already current
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Timer refresher received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    let changed = self.store.refresh();
                    tracing::debug!(
                        active = self.store.active_count(),
                        changed,
                        "Timer refresh tick"
                    );
                }
            }
        }

        tracing::info!("Timer refresher stopped");
    }
}
