//! Zone statistics model

use serde::{Deserialize, Serialize};

/// Sentinel zone for tables without a zone label
pub const SIN_ZONA: &str = "Sin zona";

/// Per-zone occupancy summary (区域占用统计)
///
/// Same shape as a row of the `vista_estadisticas_zonas` view. Has no
/// identity across calls: it is recomputed wholesale on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStat {
    pub zona: String,
    pub total_mesas: u32,
    pub mesas_libres: u32,
    pub mesas_ocupadas: u32,
    pub mesas_reservadas: u32,
    pub mesas_limpieza: u32,
    pub porcentaje_ocupacion: f64,
}

impl ZoneStat {
    /// Empty summary for a zone
    pub fn new(zona: impl Into<String>) -> Self {
        Self {
            zona: zona.into(),
            total_mesas: 0,
            mesas_libres: 0,
            mesas_ocupadas: 0,
            mesas_reservadas: 0,
            mesas_limpieza: 0,
            porcentaje_ocupacion: 0.0,
        }
    }
}
