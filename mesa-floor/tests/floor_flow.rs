// mesa-floor/tests/floor_flow.rs
// 楼面流程测试: FloorContext + FloorService over an in-memory backend

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use mesa_client::{ClientError, ClientResult, RestaurantBackend};
use mesa_floor::{
    FloorConfig, FloorContext, FloorError, FloorService, ManualClock, TimerStatus,
};
use shared::models::{EstadoMesa, EstadoReserva, Mesa, Reserva, ReservaUpdate};

#[derive(Default)]
struct FakeState {
    mesas: Vec<Mesa>,
    reservas: Vec<Reserva>,
    unavailable: HashSet<i64>,
    availability_calls: usize,
    fail_tables: bool,
}

#[derive(Default)]
struct FakeBackend {
    state: Mutex<FakeState>,
}

#[async_trait]
impl RestaurantBackend for FakeBackend {
    async fn list_tables(&self) -> ClientResult<Vec<Mesa>> {
        let state = self.state.lock().unwrap();
        if state.fail_tables {
            return Err(ClientError::Forbidden("row level policy".into()));
        }
        Ok(state.mesas.iter().filter(|m| m.activa).cloned().collect())
    }

    async fn list_reservations(&self, fecha: Option<NaiveDate>) -> ClientResult<Vec<Reserva>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .reservas
            .iter()
            .filter(|r| fecha.is_none_or(|f| r.fecha == f))
            .cloned()
            .collect())
    }

    async fn get_reservation(&self, id: i64) -> ClientResult<Reserva> {
        let state = self.state.lock().unwrap();
        state
            .reservas
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("reserva {}", id)))
    }

    async fn update_reservation(&self, id: i64, payload: &ReservaUpdate) -> ClientResult<Reserva> {
        let mut state = self.state.lock().unwrap();
        let reserva = state
            .reservas
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("reserva {}", id)))?;
        if let Some(mesa_id) = payload.mesa_id {
            reserva.mesa_id = Some(mesa_id);
        }
        if let Some(estado) = payload.estado {
            reserva.estado = estado;
        }
        Ok(reserva.clone())
    }

    async fn check_table_availability(
        &self,
        mesa_id: i64,
        _fecha: NaiveDate,
        _hora: NaiveTime,
    ) -> ClientResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.availability_calls += 1;
        Ok(!state.unavailable.contains(&mesa_id))
    }
}

fn mesa(id: i64, capacidad: i32, zona: Option<&str>, activa: bool) -> Mesa {
    Mesa {
        id,
        numero: id.to_string(),
        capacidad,
        zona: zona.map(String::from),
        activa,
        estado: EstadoMesa::Libre,
    }
}

fn hoy() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn reserva(id: i64, personas: i32, estado: EstadoReserva, mesa_id: Option<i64>) -> Reserva {
    Reserva {
        id,
        cliente_id: None,
        mesa_id,
        nombre_cliente: format!("Cliente {}", id),
        telefono: None,
        email: None,
        fecha: hoy(),
        hora: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        personas,
        estado,
        notas: None,
        created_at: None,
    }
}

fn setup() -> (Arc<FakeBackend>, Arc<ManualClock>, FloorContext) {
    let backend = Arc::new(FakeBackend::default());
    {
        let mut state = backend.state.lock().unwrap();
        state.mesas = vec![
            mesa(1, 2, Some("Interior"), true),
            mesa(2, 4, Some("Interior"), true),
            mesa(3, 6, Some("Terraza"), true),
            mesa(4, 4, None, true),
            mesa(5, 8, Some("Terraza"), false),
        ];
        state.reservas = vec![
            reserva(10, 4, EstadoReserva::Confirmada, None),
            reserva(11, 2, EstadoReserva::Pendiente, None),
            reserva(12, 3, EstadoReserva::Cancelada, None),
            reserva(13, 5, EstadoReserva::Sentada, Some(3)),
        ];
    }
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 21, 0, 0).unwrap()));
    let ctx = FloorContext::new(FloorConfig::default(), clock.clone());
    (backend, clock, ctx)
}

#[tokio::test]
async fn test_seat_and_release_reservation() {
    let (backend, _clock, ctx) = setup();
    let service = FloorService::new(backend.clone(), ctx.timers().clone());

    let (reserva, timer) = service.seat_reservation(10, 2, None).await.unwrap();
    assert_eq!(reserva.mesa_id, Some(2));
    assert_eq!(reserva.estado, EstadoReserva::Sentada);
    assert_eq!(timer.id, 2);
    assert_eq!(timer.duration, 120);
    assert!(ctx.timers().get_timer(2).unwrap().is_active);

    let last = service.release_table(2, Some(10)).await.unwrap().unwrap();
    assert_eq!(last.id, 2);
    assert!(!last.is_active);
    assert!(ctx.timers().get_timer(2).is_none());
    let closed = backend.get_reservation(10).await.unwrap();
    assert_eq!(closed.estado, EstadoReserva::Completada);

    // releasing a table without a timer is not an error
    assert!(service.release_table(2, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_seat_rejects_closed_missing_and_inactive() {
    let (backend, _clock, ctx) = setup();
    let service = FloorService::new(backend, ctx.timers().clone());

    let err = service.seat_reservation(12, 2, None).await.unwrap_err();
    assert!(matches!(err, FloorError::ReservationClosed { id: 12, estado: EstadoReserva::Cancelada }));

    let err = service.seat_reservation(99, 2, None).await.unwrap_err();
    assert!(matches!(err, FloorError::ReservationNotFound(99)));

    let err = service.seat_reservation(11, 5, None).await.unwrap_err();
    assert!(matches!(err, FloorError::TableNotFound(5)));

    assert!(ctx.timers().is_empty());
}

#[tokio::test]
async fn test_suggest_tables_orders_by_fit_and_availability() {
    let (backend, _clock, ctx) = setup();
    backend.state.lock().unwrap().unavailable.insert(2);
    let service = FloorService::new(backend.clone(), ctx.timers().clone());

    let reserva = reserva(20, 4, EstadoReserva::Pendiente, None);
    let suggestions = service.suggest_tables(&reserva).await.unwrap();

    let order: Vec<(i64, bool, i32)> = suggestions
        .iter()
        .map(|s| (s.mesa_id, s.disponible, s.plazas_sobrantes))
        .collect();
    // table 1 too small, table 5 inactive
    assert_eq!(order, vec![(4, true, 0), (3, true, 2), (2, false, 0)]);
    assert_eq!(backend.state.lock().unwrap().availability_calls, 3);
}

#[tokio::test]
async fn test_backend_failure_surfaces_to_caller() {
    let (backend, _clock, ctx) = setup();
    backend.state.lock().unwrap().fail_tables = true;
    let service = FloorService::new(backend, ctx.timers().clone());

    let err = service.restaurant_stats(hoy()).await.unwrap_err();
    assert!(matches!(err, FloorError::Client(ClientError::Forbidden(_))));
}

#[tokio::test]
async fn test_restaurant_stats() {
    let (backend, clock, ctx) = setup();
    let service = FloorService::new(backend, ctx.timers().clone());

    ctx.timers().start_timer(3, Some(60));
    ctx.timers().start_timer(1, None);
    clock.advance(chrono::Duration::minutes(70));
    ctx.timers().refresh();

    let stats = service.restaurant_stats(hoy()).await.unwrap();
    assert_eq!(stats.reservas_hoy, 3);
    assert_eq!(stats.reservas_sin_mesa, 2);
    assert_eq!(stats.comensales_hoy, 11);
    assert_eq!(stats.total_mesas, 4);
    assert_eq!(stats.mesas_con_temporizador, 2);
    assert_eq!(stats.mesas_excedidas, 1);

    let zonas: Vec<(&str, u32)> = stats.zonas.iter().map(|z| (z.zona.as_str(), z.total_mesas)).collect();
    assert_eq!(zonas, vec![("Interior", 2), ("Terraza", 1), ("Sin zona", 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_refresher_updates_active_timers_each_minute() {
    let (_backend, clock, mut ctx) = setup();
    ctx.start();
    assert!(ctx.is_running());

    let timers = ctx.timers().clone();
    timers.start_timer(1, Some(120));
    timers.start_timer(2, Some(120));
    timers.stop_timer(2);

    clock.advance(chrono::Duration::minutes(100));
    tokio::time::sleep(Duration::from_secs(61)).await;

    let active = timers.get_timer(1).unwrap();
    assert_eq!(active.elapsed_minutes, 100);
    assert_eq!(active.status, TimerStatus::Yellow);
    let stopped = timers.get_timer(2).unwrap();
    assert_eq!(stopped.elapsed_minutes, 0);

    clock.advance(chrono::Duration::minutes(20));
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(timers.get_timer(1).unwrap().status, TimerStatus::Red);

    ctx.dispose().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_refresh_after_dispose() {
    let (_backend, clock, mut ctx) = setup();
    ctx.start();
    let timers = ctx.timers().clone();
    timers.start_timer(7, None);

    ctx.dispose().await;

    clock.advance(chrono::Duration::minutes(200));
    tokio::time::sleep(Duration::from_secs(600)).await;

    let timer = timers.get_timer(7).unwrap();
    assert_eq!(timer.elapsed_minutes, 0);
    assert_eq!(timer.status, TimerStatus::Green);
}
