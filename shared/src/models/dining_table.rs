//! Dining Table Model (mesas)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Live state of a table (桌台状态)
///
/// Deserialization is lenient: an unknown value from the backend falls back
/// to [`EstadoMesa::Libre`] with a warning instead of failing the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EstadoMesa {
    #[default]
    Libre,
    Ocupada,
    Reservada,
    Limpieza,
}

impl EstadoMesa {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoMesa::Libre => "libre",
            EstadoMesa::Ocupada => "ocupada",
            EstadoMesa::Reservada => "reservada",
            EstadoMesa::Limpieza => "limpieza",
        }
    }

    /// Parse, falling back to `Libre` for unknown input.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "Unknown table state, falling back to libre");
            EstadoMesa::Libre
        })
    }
}

impl FromStr for EstadoMesa {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "libre" => Ok(EstadoMesa::Libre),
            "ocupada" => Ok(EstadoMesa::Ocupada),
            "reservada" => Ok(EstadoMesa::Reservada),
            "limpieza" => Ok(EstadoMesa::Limpieza),
            _ => Err(ModelError::InvalidEnum {
                kind: "estado_mesa",
                value: s.to_string(),
            }),
        }
    }
}

impl From<String> for EstadoMesa {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for EstadoMesa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesa {
    pub id: i64,
    /// Table label as stored (e.g. "12", "T1")
    pub numero: String,
    pub capacidad: i32,
    /// Zone label; tables without one are grouped under [`crate::models::SIN_ZONA`]
    #[serde(default)]
    pub zona: Option<String>,
    #[serde(default = "default_activa")]
    pub activa: bool,
    #[serde(default)]
    pub estado: EstadoMesa,
}

fn default_activa() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesa_deserialize_defaults() {
        let mesa: Mesa =
            serde_json::from_str(r#"{"id": 3, "numero": "12", "capacidad": 4}"#).unwrap();
        assert_eq!(mesa.zona, None);
        assert!(mesa.activa);
        assert_eq!(mesa.estado, EstadoMesa::Libre);
    }

    #[test]
    fn test_textual_table_number() {
        let mesa: Mesa =
            serde_json::from_str(r#"{"id": 1, "numero": "T1", "capacidad": 2}"#).unwrap();
        assert_eq!(mesa.numero, "T1");
    }

    #[test]
    fn test_unknown_estado_falls_back_to_libre() {
        let mesa: Mesa = serde_json::from_str(
            r#"{"id": 1, "numero": "1", "capacidad": 2, "zona": "Terraza", "estado": "rota"}"#,
        )
        .unwrap();
        assert_eq!(mesa.estado, EstadoMesa::Libre);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("Ocupada".parse::<EstadoMesa>(), Ok(EstadoMesa::Ocupada));
        assert!("rota".parse::<EstadoMesa>().is_err());
    }

    #[test]
    fn test_estado_serializes_snake_case() {
        let json = serde_json::to_string(&EstadoMesa::Limpieza).unwrap();
        assert_eq!(json, r#""limpieza""#);
    }
}
