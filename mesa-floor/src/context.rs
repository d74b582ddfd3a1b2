//! Floor context
//!
//! Owns the timer store and its refresher for the lifetime of one floor
//! view. Create it on mount, call [`FloorContext::start`], hand
//! [`FloorContext::timers`] to consumers, and [`FloorContext::dispose`] on
//! teardown. After `dispose` returns the refresher has exited and no
//! background mutation can happen.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::tasks::BackgroundTasks;
use crate::timer::{Refresher, TimerStore};
use crate::FloorConfig;

pub struct FloorContext {
    config: FloorConfig,
    timers: TimerStore,
    tasks: Option<BackgroundTasks>,
}

impl FloorContext {
    pub fn new(config: FloorConfig, clock: Arc<dyn Clock>) -> Self {
        let timers = TimerStore::with_default_duration(clock, config.default_duration_minutes);
        Self {
            config,
            timers,
            tasks: None,
        }
    }

    /// Context on the wall clock
    pub fn with_system_clock(config: FloorConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn config(&self) -> &FloorConfig {
        &self.config
    }

    /// Shared handle to the timer store
    pub fn timers(&self) -> &TimerStore {
        &self.timers
    }

    pub fn is_running(&self) -> bool {
        self.tasks.is_some()
    }

    /// Spawn the periodic refresher. Calling it twice is a no-op.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.tasks.is_some() {
            return;
        }
        let mut tasks = BackgroundTasks::new();
        let refresher = Refresher::new(
            self.timers.clone(),
            self.config.refresh_interval,
            tasks.shutdown_token(),
        );
        tasks.spawn("timer_refresher", refresher.run());
        self.tasks = Some(tasks);
    }

    /// Stop the refresher and wait for it to exit. Timers stay readable.
    pub async fn dispose(mut self) {
        if let Some(tasks) = self.tasks.take() {
            tasks.shutdown().await;
        }
    }
}

impl Drop for FloorContext {
    fn drop(&mut self) {
        // Dropped without dispose(): still stop the refresher
        if let Some(tasks) = self.tasks.take() {
            tasks.cancel();
        }
    }
}

impl std::fmt::Debug for FloorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorContext")
            .field("config", &self.config)
            .field("timers", &self.timers)
            .field("running", &self.is_running())
            .finish()
    }
}
