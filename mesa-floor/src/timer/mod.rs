//! Table timers (桌台计时)
//!
//! One timer per table id, started when the table is occupied. Elapsed
//! minutes are recomputed from the start time on every refresh, never
//! incremented, so a missed tick cannot drift the value.

mod refresher;
mod status;

pub use refresher::Refresher;
pub use status::{TimerStatus, classify};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::clock::Clock;

/// Default table time budget in minutes
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Timer state for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableTimer {
    /// Table id
    pub id: i64,
    pub start_time: DateTime<Utc>,
    /// Time budget in minutes
    pub duration: u32,
    pub is_active: bool,
    pub elapsed_minutes: u32,
    pub status: TimerStatus,
}

impl TableTimer {
    fn recompute(&mut self, now: DateTime<Utc>) {
        self.elapsed_minutes = shared::util::elapsed_minutes(self.start_time, now);
        self.status = classify(self.elapsed_minutes, self.duration);
    }
}

/// In-memory timer store
///
/// Cheap to clone; clones share the same map. Every mutation takes the
/// write lock, so a refresh pass is atomic relative to caller mutations.
#[derive(Clone)]
pub struct TimerStore {
    timers: Arc<RwLock<HashMap<i64, TableTimer>>>,
    clock: Arc<dyn Clock>,
    default_duration: u32,
}

impl TimerStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_default_duration(clock, DEFAULT_DURATION_MINUTES)
    }

    pub fn with_default_duration(clock: Arc<dyn Clock>, default_duration: u32) -> Self {
        Self {
            timers: Arc::new(RwLock::new(HashMap::new())),
            clock,
            default_duration,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, TableTimer>> {
        self.timers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, TableTimer>> {
        self.timers.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn default_duration(&self) -> u32 {
        self.default_duration
    }

    /// Start (or restart) the timer for a table. Last write wins.
    pub fn start_timer(&self, table_id: i64, duration_minutes: Option<u32>) -> TableTimer {
        let duration = duration_minutes.unwrap_or(self.default_duration);
        let timer = TableTimer {
            id: table_id,
            start_time: self.clock.now(),
            duration,
            is_active: true,
            elapsed_minutes: 0,
            status: classify(0, duration),
        };
        let previous = self.write().insert(table_id, timer.clone());
        tracing::debug!(
            table_id,
            duration,
            restarted = previous.is_some(),
            "Table timer started"
        );
        timer
    }

    /// Freeze a timer. Returns `false` if the table has none.
    pub fn stop_timer(&self, table_id: i64) -> bool {
        match self.write().get_mut(&table_id) {
            Some(timer) => {
                timer.is_active = false;
                tracing::debug!(table_id, elapsed = timer.elapsed_minutes, "Table timer stopped");
                true
            }
            None => false,
        }
    }

    /// Delete a timer, returning its last snapshot
    pub fn remove_timer(&self, table_id: i64) -> Option<TableTimer> {
        self.write().remove(&table_id)
    }

    pub fn get_timer(&self, table_id: i64) -> Option<TableTimer> {
        self.read().get(&table_id).cloned()
    }

    /// Snapshot of all timers ordered by table id
    pub fn timers(&self) -> Vec<TableTimer> {
        let mut all: Vec<TableTimer> = self.read().values().cloned().collect();
        all.sort_by_key(|t| t.id);
        all
    }

    pub fn active_count(&self) -> usize {
        self.read().values().filter(|t| t.is_active).count()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// One refresh pass: recompute every active timer from the clock.
    ///
    /// Inactive timers are left as they were. Returns how many timers changed
    /// status.
    pub fn refresh(&self) -> usize {
        let now = self.clock.now();
        let mut timers = self.write();
        let mut changed = 0;
        for timer in timers.values_mut().filter(|t| t.is_active) {
            let before = timer.status;
            timer.recompute(now);
            if timer.status != before {
                changed += 1;
                tracing::info!(
                    table_id = timer.id,
                    elapsed = timer.elapsed_minutes,
                    status = %timer.status,
                    "Table timer status changed"
                );
            }
        }
        changed
    }
}

impl std::fmt::Debug for TimerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerStore")
            .field("timers", &self.len())
            .field("default_duration", &self.default_duration)
            .finish()
    }
}
