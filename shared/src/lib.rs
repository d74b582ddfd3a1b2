//! Shared types for the mesa workspace
//!
//! Row shapes of the hosted backend (mesas, reservas, clientes), typed
//! mutation payloads, dashboard aggregates and the common error type.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use serde::{Deserialize, Serialize};
