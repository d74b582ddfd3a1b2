//! Traffic-light classification of table occupancy time

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status of a running table timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerStatus::Green => f.write_str("green"),
            TimerStatus::Yellow => f.write_str("yellow"),
            TimerStatus::Red => f.write_str("red"),
        }
    }
}

/// Classify `elapsed / duration`: red from 1.0, yellow from 0.75.
///
/// A zero duration has no time budget at all and is red.
pub fn classify(elapsed_minutes: u32, duration_minutes: u32) -> TimerStatus {
    if duration_minutes == 0 {
        return TimerStatus::Red;
    }
    // Integer form of the ratio thresholds
    let elapsed = u64::from(elapsed_minutes);
    let duration = u64::from(duration_minutes);
    if elapsed >= duration {
        TimerStatus::Red
    } else if elapsed * 4 >= duration * 3 {
        TimerStatus::Yellow
    } else {
        TimerStatus::Green
    }
}
