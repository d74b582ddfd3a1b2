//! Data models
//!
//! Row shapes of the hosted backend plus typed mutation payloads.
//! Field names are the backend column names and must stay verbatim.

pub mod customer;
pub mod dining_table;
pub mod reservation;
pub mod stats;
pub mod suggestion;
pub mod zone;

// Re-exports
pub use customer::*;
pub use dining_table::*;
pub use reservation::*;
pub use stats::*;
pub use suggestion::*;
pub use zone::*;
