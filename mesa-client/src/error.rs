//! Client error types

use reqwest::StatusCode;
use shared::ModelError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key missing or rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Row-level policy denied the request
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique/foreign key conflict
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Payload rejected locally or by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Backend error ({status}): {message}")]
    Backend { status: StatusCode, message: String },

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ModelError> for ClientError {
    fn from(err: ModelError) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl ClientError {
    /// Map a non-success status and backend message to an error
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Backend { status, message },
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
