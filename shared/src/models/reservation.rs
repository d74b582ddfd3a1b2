//! Reservation Model (reservas)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::ModelError;

/// Reservation status (预订状态)
///
/// Lenient on the way in: unknown values fall back to `Pendiente`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EstadoReserva {
    #[default]
    Pendiente,
    Confirmada,
    Sentada,
    Completada,
    Cancelada,
    NoShow,
}

impl EstadoReserva {
    /// States still waiting for a table
    pub const PENDIENTES: [EstadoReserva; 2] = [EstadoReserva::Pendiente, EstadoReserva::Confirmada];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoReserva::Pendiente => "pendiente",
            EstadoReserva::Confirmada => "confirmada",
            EstadoReserva::Sentada => "sentada",
            EstadoReserva::Completada => "completada",
            EstadoReserva::Cancelada => "cancelada",
            EstadoReserva::NoShow => "no_show",
        }
    }

    pub fn is_pending(&self) -> bool {
        Self::PENDIENTES.contains(self)
    }

    /// Parse, falling back to `Pendiente` for unknown input.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unknown reservation state, falling back to pendiente");
            EstadoReserva::Pendiente
        })
    }
}

impl FromStr for EstadoReserva {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pendiente" => Ok(EstadoReserva::Pendiente),
            "confirmada" => Ok(EstadoReserva::Confirmada),
            "sentada" => Ok(EstadoReserva::Sentada),
            "completada" => Ok(EstadoReserva::Completada),
            "cancelada" => Ok(EstadoReserva::Cancelada),
            "no_show" => Ok(EstadoReserva::NoShow),
            _ => Err(ModelError::InvalidEnum {
                kind: "estado_reserva",
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for EstadoReserva {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for EstadoReserva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity (预订)
///
/// `mesa_id = None` is the normal "not yet assigned" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    pub id: i64,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub mesa_id: Option<i64>,
    pub nombre_cliente: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub personas: i32,
    #[serde(default)]
    pub estado: EstadoReserva,
    #[serde(default)]
    pub notas: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reserva {
    /// Whether the reservation still waits for a table
    pub fn is_unassigned(&self) -> bool {
        self.mesa_id.is_none() && self.estado.is_pending()
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReservaCreate {
    #[validate(length(min = 1, max = 120))]
    pub nombre_cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, max = 20))]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    #[validate(range(min = 1, max = 100))]
    pub personas: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesa_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub notas: Option<String>,
}

/// Update reservation payload
///
/// Only the fields present are sent; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReservaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 120))]
    pub nombre_cliente: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, max = 20))]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 100))]
    pub personas: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesa_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoReserva>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub notas: Option<String>,
}

impl ReservaUpdate {
    /// Status-only update
    pub fn estado(estado: EstadoReserva) -> Self {
        Self {
            estado: Some(estado),
            ..Default::default()
        }
    }
}
