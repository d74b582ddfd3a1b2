//! Reservations (`reservas`) and the availability procedure

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use shared::error::validate_payload;
use shared::models::{EstadoReserva, Reserva, ReservaCreate, ReservaUpdate};

use crate::{ClientError, ClientResult, Filter, HttpClient};

pub const RESERVATIONS_TABLE: &str = "reservas";
pub const AVAILABILITY_RPC: &str = "verificar_disponibilidad_mesa";

/// Parameters of `verificar_disponibilidad_mesa`
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityParams {
    pub p_mesa_id: i64,
    pub p_fecha: NaiveDate,
    pub p_hora: NaiveTime,
}

/// Keep reservations still waiting for a table, earliest first.
///
/// Rows with a table or in a non-pending state are dropped. Ties on
/// `(fecha, hora)` keep their input order.
pub fn unassigned_reservations(rows: impl IntoIterator<Item = Reserva>) -> Vec<Reserva> {
    let mut pending: Vec<Reserva> = rows.into_iter().filter(Reserva::is_unassigned).collect();
    pending.sort_by_key(|r| (r.fecha, r.hora));
    pending
}

impl HttpClient {
    // ========== Reservations API ==========

    /// List reservations, optionally for one day, ordered by time
    pub async fn list_reservations(&self, fecha: Option<NaiveDate>) -> ClientResult<Vec<Reserva>> {
        let mut filter = Filter::new().select("*");
        if let Some(fecha) = fecha {
            filter = filter.eq("fecha", fecha);
        }
        self.select(RESERVATIONS_TABLE, &filter.order("fecha.asc,hora.asc")).await
    }

    /// Get one reservation by id
    pub async fn get_reservation(&self, id: i64) -> ClientResult<Reserva> {
        self.select_one(RESERVATIONS_TABLE, &Filter::new().select("*").eq("id", id))
            .await
            .map_err(|e| match e {
                ClientError::NotFound(_) => ClientError::NotFound(format!("reserva {}", id)),
                other => other,
            })
    }

    /// Pending/confirmed reservations without a table, earliest first
    pub async fn list_pending_unassigned(&self) -> ClientResult<Vec<Reserva>> {
        let filter = Filter::new()
            .select("*")
            .is_null("mesa_id")
            .in_list("estado", EstadoReserva::PENDIENTES)
            .order("fecha.asc,hora.asc");
        let rows: Vec<Reserva> = self.select(RESERVATIONS_TABLE, &filter).await?;
        Ok(unassigned_reservations(rows))
    }

    /// Create a reservation
    pub async fn create_reservation(&self, payload: &ReservaCreate) -> ClientResult<Reserva> {
        validate_payload(payload)?;
        let reserva: Reserva = self.insert(RESERVATIONS_TABLE, payload).await?;
        tracing::info!(reserva_id = reserva.id, fecha = %reserva.fecha, personas = reserva.personas, "Reservation created");
        Ok(reserva)
    }

    /// Partially update a reservation
    pub async fn update_reservation(&self, id: i64, payload: &ReservaUpdate) -> ClientResult<Reserva> {
        validate_payload(payload)?;
        self.update::<Reserva, _>(RESERVATIONS_TABLE, &Filter::new().eq("id", id), payload)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("reserva {}", id)))
    }

    /// Mark a reservation as cancelled
    pub async fn cancel_reservation(&self, id: i64) -> ClientResult<Reserva> {
        self.update_reservation(id, &ReservaUpdate::estado(EstadoReserva::Cancelada))
            .await
    }

    /// Assign a table to a reservation
    pub async fn assign_table(&self, reserva_id: i64, mesa_id: i64) -> ClientResult<Reserva> {
        let payload = ReservaUpdate {
            mesa_id: Some(mesa_id),
            ..Default::default()
        };
        self.update_reservation(reserva_id, &payload).await
    }

    /// Ask the backend whether a table is free for a slot
    pub async fn check_table_availability(
        &self,
        mesa_id: i64,
        fecha: NaiveDate,
        hora: NaiveTime,
    ) -> ClientResult<bool> {
        let params = AvailabilityParams {
            p_mesa_id: mesa_id,
            p_fecha: fecha,
            p_hora: hora,
        };
        self.rpc(AVAILABILITY_RPC, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserva(id: i64, mesa_id: Option<i64>, estado: EstadoReserva, fecha: &str, hora: &str) -> Reserva {
        Reserva {
            id,
            cliente_id: None,
            mesa_id,
            nombre_cliente: format!("cliente {}", id),
            telefono: None,
            email: None,
            fecha: fecha.parse().unwrap(),
            hora: hora.parse().unwrap(),
            personas: 2,
            estado,
            notas: None,
            created_at: None,
        }
    }

    #[test]
    fn test_unassigned_keeps_only_pending_without_table() {
        let rows = vec![
            reserva(1, None, EstadoReserva::Confirmada, "2026-10-19", "21:00:00"),
            reserva(2, Some(4), EstadoReserva::Pendiente, "2026-10-19", "20:00:00"),
            reserva(3, None, EstadoReserva::Cancelada, "2026-10-19", "19:00:00"),
            reserva(4, None, EstadoReserva::Pendiente, "2026-10-19", "13:30:00"),
            reserva(5, None, EstadoReserva::Sentada, "2026-10-19", "14:00:00"),
            reserva(6, None, EstadoReserva::Pendiente, "2026-10-18", "22:00:00"),
        ];
        let ids: Vec<i64> = unassigned_reservations(rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 4, 1]);
    }

    #[test]
    fn test_unassigned_ties_keep_input_order() {
        let rows = vec![
            reserva(9, None, EstadoReserva::Pendiente, "2026-10-19", "20:00:00"),
            reserva(3, None, EstadoReserva::Confirmada, "2026-10-19", "20:00:00"),
        ];
        let ids: Vec<i64> = unassigned_reservations(rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn test_unassigned_empty() {
        assert!(unassigned_reservations(Vec::new()).is_empty());
    }

    #[test]
    fn test_availability_params_names() {
        let params = AvailabilityParams {
            p_mesa_id: 8,
            p_fecha: "2026-10-19".parse().unwrap(),
            p_hora: "21:15:00".parse().unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"p_mesa_id": 8, "p_fecha": "2026-10-19", "p_hora": "21:15:00"})
        );
    }
}
