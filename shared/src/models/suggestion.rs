//! Table suggestion model

use serde::{Deserialize, Serialize};

/// One candidate table for a reservation (推荐桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SugerenciaMesa {
    pub mesa_id: i64,
    pub numero: String,
    pub capacidad: i32,
    pub zona: Option<String>,
    /// Result of `verificar_disponibilidad_mesa` for the reservation slot
    pub disponible: bool,
    /// Seats left empty if the party sits here
    pub plazas_sobrantes: i32,
}
