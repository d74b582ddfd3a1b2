//! Floor service
//!
//! Front-of-house operations that combine backend calls with the local
//! timer store: seating, releasing, table suggestions and the dashboard.

use chrono::NaiveDate;
use futures::future::try_join_all;
use mesa_client::{ClientError, RestaurantBackend};
use shared::models::{
    EstadisticasRestaurante, EstadoReserva, Mesa, Reserva, ReservaUpdate, SugerenciaMesa,
};
use std::sync::Arc;

use crate::timer::{TableTimer, TimerStatus, TimerStore};
use crate::zones::aggregate_zones;
use crate::{FloorError, FloorResult};

pub struct FloorService<B: RestaurantBackend> {
    backend: Arc<B>,
    timers: TimerStore,
}

impl<B: RestaurantBackend> Clone for FloorService<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            timers: self.timers.clone(),
        }
    }
}

impl<B: RestaurantBackend> FloorService<B> {
    pub fn new(backend: Arc<B>, timers: TimerStore) -> Self {
        Self { backend, timers }
    }

    pub fn timers(&self) -> &TimerStore {
        &self.timers
    }

    async fn reservation(&self, id: i64) -> FloorResult<Reserva> {
        self.backend.get_reservation(id).await.map_err(|e| match e {
            ClientError::NotFound(_) => FloorError::ReservationNotFound(id),
            other => other.into(),
        })
    }

    async fn active_table(&self, mesa_id: i64) -> FloorResult<Mesa> {
        self.backend
            .list_tables()
            .await?
            .into_iter()
            .find(|m| m.id == mesa_id && m.activa)
            .ok_or(FloorError::TableNotFound(mesa_id))
    }

    /// Seat a reservation: assign the table, mark it `sentada`, start the timer.
    pub async fn seat_reservation(
        &self,
        reserva_id: i64,
        mesa_id: i64,
        duration_minutes: Option<u32>,
    ) -> FloorResult<(Reserva, TableTimer)> {
        let reserva = self.reservation(reserva_id).await?;
        if matches!(
            reserva.estado,
            EstadoReserva::Cancelada | EstadoReserva::Completada | EstadoReserva::NoShow
        ) {
            return Err(FloorError::ReservationClosed {
                id: reserva_id,
                estado: reserva.estado,
            });
        }
        let mesa = self.active_table(mesa_id).await?;
        if mesa.capacidad < reserva.personas {
            tracing::warn!(
                reserva_id,
                mesa_id,
                capacidad = mesa.capacidad,
                personas = reserva.personas,
                "Seating party larger than table capacity"
            );
        }

        let update = ReservaUpdate {
            mesa_id: Some(mesa_id),
            estado: Some(EstadoReserva::Sentada),
            ..Default::default()
        };
        let reserva = self.backend.update_reservation(reserva_id, &update).await?;
        let timer = self.timers.start_timer(mesa_id, duration_minutes);
        tracing::info!(reserva_id, mesa_id, duration = timer.duration, "Reservation seated");
        Ok((reserva, timer))
    }

    /// Free a table: close the reservation (if given), then drop its timer.
    ///
    /// Returns the timer's last snapshot, `None` if the table had no timer.
    pub async fn release_table(
        &self,
        mesa_id: i64,
        reserva_id: Option<i64>,
    ) -> FloorResult<Option<TableTimer>> {
        if let Some(reserva_id) = reserva_id {
            self.backend
                .update_reservation(reserva_id, &ReservaUpdate::estado(EstadoReserva::Completada))
                .await
                .map_err(|e| match e {
                    ClientError::NotFound(_) => FloorError::ReservationNotFound(reserva_id),
                    other => other.into(),
                })?;
        }

        self.timers.stop_timer(mesa_id);
        let last = self.timers.remove_timer(mesa_id);
        if let Some(timer) = &last {
            tracing::info!(mesa_id, elapsed = timer.elapsed_minutes, "Table released");
        }
        Ok(last)
    }

    /// Candidate tables for a reservation, available ones first.
    ///
    /// Only active tables that fit the party are considered, tightest fit
    /// first, ties broken by table label. Availability comes from the backend procedure, one call per
    /// candidate, issued concurrently.
    pub async fn suggest_tables(&self, reserva: &Reserva) -> FloorResult<Vec<SugerenciaMesa>> {
        let mut candidates: Vec<Mesa> = self
            .backend
            .list_tables()
            .await?
            .into_iter()
            .filter(|m| m.activa && m.capacidad >= reserva.personas)
            .collect();
        candidates.sort_by(|a, b| {
            (a.capacidad - reserva.personas)
                .cmp(&(b.capacidad - reserva.personas))
                .then_with(|| a.numero.cmp(&b.numero))
        });

        let checks = candidates.iter().map(|m| {
            self.backend
                .check_table_availability(m.id, reserva.fecha, reserva.hora)
        });
        let available = try_join_all(checks).await?;

        let mut suggestions: Vec<SugerenciaMesa> = candidates
            .into_iter()
            .zip(available)
            .map(|(m, disponible)| SugerenciaMesa {
                mesa_id: m.id,
                numero: m.numero,
                capacidad: m.capacidad,
                plazas_sobrantes: m.capacidad - reserva.personas,
                zona: m.zona,
                disponible,
            })
            .collect();
        suggestions.sort_by_key(|s| !s.disponible);
        Ok(suggestions)
    }

    /// Dashboard figures for one service day
    pub async fn restaurant_stats(&self, fecha: NaiveDate) -> FloorResult<EstadisticasRestaurante> {
        let (mesas, reservas) = futures::try_join!(
            self.backend.list_tables(),
            self.backend.list_reservations(Some(fecha)),
        )?;

        let vigentes: Vec<&Reserva> = reservas
            .iter()
            .filter(|r| !matches!(r.estado, EstadoReserva::Cancelada | EstadoReserva::NoShow))
            .collect();
        let comensales: i64 = vigentes.iter().map(|r| i64::from(r.personas.max(0))).sum();

        let timers = self.timers.timers();
        let active: Vec<&TableTimer> = timers.iter().filter(|t| t.is_active).collect();

        Ok(EstadisticasRestaurante {
            fecha,
            reservas_hoy: count(vigentes.len()),
            reservas_sin_mesa: count(vigentes.iter().filter(|r| r.is_unassigned()).count()),
            comensales_hoy: u32::try_from(comensales).unwrap_or(u32::MAX),
            total_mesas: count(mesas.len()),
            mesas_con_temporizador: count(active.len()),
            mesas_excedidas: count(active.iter().filter(|t| t.status == TimerStatus::Red).count()),
            zonas: aggregate_zones(&mesas),
        })
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
