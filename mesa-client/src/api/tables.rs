//! Tables (`mesas`)

use shared::models::Mesa;

use crate::{ClientResult, Filter, HttpClient};

pub const TABLES_TABLE: &str = "mesas";

impl HttpClient {
    // ========== Tables API ==========

    /// Active tables ordered by number
    pub async fn list_tables(&self) -> ClientResult<Vec<Mesa>> {
        let filter = Filter::new().select("*").eq("activa", true).order("numero.asc");
        self.select(TABLES_TABLE, &filter).await
    }

    /// All tables, inactive included
    pub async fn list_all_tables(&self) -> ClientResult<Vec<Mesa>> {
        let filter = Filter::new().select("*").order("numero.asc");
        self.select(TABLES_TABLE, &filter).await
    }
}
