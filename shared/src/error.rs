//! Error types for the shared crate
//!
//! Model-level failures: payload validation and strict enum parsing.

use thiserror::Error;
use validator::Validate;

/// Model error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Payload failed field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Enum value not recognised (strict parsing only)
    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnum { kind: &'static str, value: String },
}

impl From<validator::ValidationErrors> for ModelError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ModelError::Validation(errors.to_string())
    }
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Run `validator` rules on a payload before it leaves the process.
pub fn validate_payload<T: Validate>(payload: &T) -> ModelResult<()> {
    payload.validate().map_err(ModelError::from)
}
