//! Dashboard statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ZoneStat;

/// Restaurant overview for one service day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticasRestaurante {
    pub fecha: NaiveDate,
    /// Reservations for the day, cancelled and no-show excluded
    pub reservas_hoy: u32,
    /// Of those, still pendiente/confirmada without a table
    pub reservas_sin_mesa: u32,
    /// Expected guests (sum of `personas`)
    pub comensales_hoy: u32,
    pub total_mesas: u32,
    /// Tables with a running timer
    pub mesas_con_temporizador: u32,
    /// Running timers already past their configured duration
    pub mesas_excedidas: u32,
    pub zonas: Vec<ZoneStat>,
}
