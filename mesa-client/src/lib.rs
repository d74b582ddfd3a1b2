//! Mesa Client - HTTP client for the hosted restaurant backend
//!
//! Typed access to the `reservas`, `clientes`, `mesas` tables, the
//! `vista_estadisticas_zonas` view and the `verificar_disponibilidad_mesa` /
//! `registrar_cliente_si_no_existe` procedures.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod query;

pub use api::unassigned_reservations;
pub use backend::RestaurantBackend;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use query::Filter;

// Re-export shared models for convenience
pub use shared::models;
