//! Zone statistics view

use shared::models::ZoneStat;

use crate::{ClientResult, Filter, HttpClient};

pub const ZONE_STATS_VIEW: &str = "vista_estadisticas_zonas";

impl HttpClient {
    /// Rows of `vista_estadisticas_zonas`, as computed by the backend
    pub async fn zone_stats_view(&self) -> ClientResult<Vec<ZoneStat>> {
        self.select(ZONE_STATS_VIEW, &Filter::new().select("*")).await
    }
}
