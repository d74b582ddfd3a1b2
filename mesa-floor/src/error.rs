//! Floor service errors

use mesa_client::ClientError;
use shared::models::EstadoReserva;
use thiserror::Error;

/// Floor error type
#[derive(Debug, Error)]
pub enum FloorError {
    /// Backend request failed; already logged by the client
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Reservation {0} not found")]
    ReservationNotFound(i64),

    #[error("Table {0} not found or inactive")]
    TableNotFound(i64),

    /// Reservation can no longer be seated
    #[error("Reservation {id} is {estado}")]
    ReservationClosed { id: i64, estado: EstadoReserva },
}

/// Result type for floor operations
pub type FloorResult<T> = Result<T, FloorError>;
