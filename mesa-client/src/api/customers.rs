//! Customers (`clientes` / legacy `contacts`) and the dedup procedure

use serde::Serialize;
use shared::error::validate_payload;
use shared::models::{Cliente, ClienteCreate, ClienteUpdate};

use crate::{ClientError, ClientResult, Filter, HttpClient};

pub const REGISTER_CUSTOMER_RPC: &str = "registrar_cliente_si_no_existe";

/// Parameters of `registrar_cliente_si_no_existe`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterCustomerParams<'a> {
    pub p_nombre: &'a str,
    pub p_telefono: Option<&'a str>,
    pub p_email: Option<&'a str>,
}

impl HttpClient {
    // ========== Customers API ==========

    /// List customers by name
    pub async fn list_customers(&self) -> ClientResult<Vec<Cliente>> {
        let filter = Filter::new().select("*").order("nombre.asc");
        self.select(self.customers_table(), &filter).await
    }

    /// Search customers by name, phone or email
    pub async fn search_customers(&self, term: &str) -> ClientResult<Vec<Cliente>> {
        if term.trim().is_empty() {
            return self.list_customers().await;
        }
        let filter = Filter::new()
            .select("*")
            .search(&["nombre", "telefono", "email"], term)
            .order("nombre.asc");
        self.select(self.customers_table(), &filter).await
    }

    /// Create a customer row directly (no deduplication)
    pub async fn create_customer(&self, payload: &ClienteCreate) -> ClientResult<Cliente> {
        validate_payload(payload)?;
        let cliente: Cliente = self.insert(self.customers_table(), payload).await?;
        tracing::info!(cliente_id = cliente.id, "Customer created");
        Ok(cliente)
    }

    /// Partially update a customer
    pub async fn update_customer(&self, id: i64, payload: &ClienteUpdate) -> ClientResult<Cliente> {
        validate_payload(payload)?;
        self.update::<Cliente, _>(self.customers_table(), &Filter::new().eq("id", id), payload)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("cliente {}", id)))
    }

    /// Register a customer unless one already matches; returns the customer id.
    ///
    /// Matching rules live in the backend procedure.
    pub async fn register_customer_if_missing(&self, payload: &ClienteCreate) -> ClientResult<i64> {
        validate_payload(payload)?;
        let params = RegisterCustomerParams {
            p_nombre: &payload.nombre,
            p_telefono: payload.telefono.as_deref(),
            p_email: payload.email.as_deref(),
        };
        let id: i64 = self.rpc(REGISTER_CUSTOMER_RPC, &params).await?;
        tracing::debug!(cliente_id = id, "Customer registered or matched");
        Ok(id)
    }
}
