//! Mesa Floor - front-of-house state for the restaurant floor
//!
//! - [`timer`]: per-table timers with traffic-light status and the periodic refresher
//! - [`zones`]: zone occupancy aggregation
//! - [`service`]: seating, releasing, suggestions and dashboard figures
//! - [`context`]: lifecycle owner of the timer store and its refresher

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod service;
pub mod tasks;
pub mod timer;
pub mod zones;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FloorConfig, load_env};
pub use context::FloorContext;
pub use error::{FloorError, FloorResult};
pub use service::FloorService;
pub use timer::{TableTimer, TimerStatus, TimerStore, classify};
pub use zones::aggregate_zones;

// Re-exports for callers that only depend on this crate
pub use mesa_client::unassigned_reservations;
