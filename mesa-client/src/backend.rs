//! Backend seam used by the floor service

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use shared::models::{Mesa, Reserva, ReservaUpdate};

use crate::{ClientResult, HttpClient};

/// The subset of backend operations the floor logic depends on
#[async_trait]
pub trait RestaurantBackend: Send + Sync {
    async fn list_tables(&self) -> ClientResult<Vec<Mesa>>;
    async fn list_reservations(&self, fecha: Option<NaiveDate>) -> ClientResult<Vec<Reserva>>;
    async fn get_reservation(&self, id: i64) -> ClientResult<Reserva>;
    async fn update_reservation(&self, id: i64, payload: &ReservaUpdate) -> ClientResult<Reserva>;
    async fn check_table_availability(
        &self,
        mesa_id: i64,
        fecha: NaiveDate,
        hora: NaiveTime,
    ) -> ClientResult<bool>;
}

#[async_trait]
impl RestaurantBackend for HttpClient {
    async fn list_tables(&self) -> ClientResult<Vec<Mesa>> {
        HttpClient::list_tables(self).await
    }

    async fn list_reservations(&self, fecha: Option<NaiveDate>) -> ClientResult<Vec<Reserva>> {
        HttpClient::list_reservations(self, fecha).await
    }

    async fn get_reservation(&self, id: i64) -> ClientResult<Reserva> {
        HttpClient::get_reservation(self, id).await
    }

    async fn update_reservation(&self, id: i64, payload: &ReservaUpdate) -> ClientResult<Reserva> {
        HttpClient::update_reservation(self, id, payload).await
    }

    async fn check_table_availability(
        &self,
        mesa_id: i64,
        fecha: NaiveDate,
        hora: NaiveTime,
    ) -> ClientResult<bool> {
        HttpClient::check_table_availability(self, mesa_id, fecha, hora).await
    }
}
