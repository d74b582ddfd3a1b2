//! HTTP client for the hosted backend
//!
//! Thin wrapper over the REST surface: table reads/writes under
//! `/rest/v1/<table>` and stored procedures under `/rest/v1/rpc/<name>`.
//! Failures are logged once and returned to the caller; there is no retry.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, Filter};

const REST_PREFIX: &str = "rest/v1";

/// Error body returned by the backend
#[derive(serde::Deserialize)]
struct BackendErrorBody {
    message: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// HTTP client for the hosted relational backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    customers_table: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.api_key.is_empty() {
            return Err(ClientError::Config("API key is empty".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            customers_table: config.customers_table.clone(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Customer table in use (`clientes` or legacy `contacts`)
    pub fn customers_table(&self) -> &str {
        &self.customers_table
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}/{}", self.base_url, REST_PREFIX, path);
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// GET rows from a table or view
    pub async fn select<T: DeserializeOwned>(&self, table: &str, filter: &Filter) -> ClientResult<Vec<T>> {
        let request = self.request(Method::GET, table).query(filter.params());
        self.send("select", table, request).await
    }

    /// GET the first row matching `filter`, `NotFound` if none
    pub async fn select_one<T: DeserializeOwned>(&self, table: &str, filter: &Filter) -> ClientResult<T> {
        let filter = filter.clone().limit(1);
        self.select::<T>(table, &filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound(format!("{} row", table)))
    }

    /// POST a row and return its stored representation
    pub async fn insert<T: DeserializeOwned, B: Serialize + ?Sized>(&self, table: &str, body: &B) -> ClientResult<T> {
        let request = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body);
        let rows: Vec<T> = self.send("insert", table, request).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ClientError::InvalidResponse(format!("insert into {} returned no row", table)))
    }

    /// PATCH rows matching `filter`, returning the updated rows
    pub async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        table: &str,
        filter: &Filter,
        body: &B,
    ) -> ClientResult<Vec<T>> {
        // Unfiltered PATCH would touch every row
        if filter.is_empty() {
            return Err(ClientError::Validation(format!("refusing unfiltered update on {}", table)));
        }
        let request = self
            .request(Method::PATCH, table)
            .query(filter.params())
            .header("Prefer", "return=representation")
            .json(body);
        self.send("update", table, request).await
    }

    /// DELETE rows matching `filter`
    pub async fn delete(&self, table: &str, filter: &Filter) -> ClientResult<()> {
        if filter.is_empty() {
            return Err(ClientError::Validation(format!("refusing unfiltered delete on {}", table)));
        }
        let request = self.request(Method::DELETE, table).query(filter.params());
        self.dispatch("delete", table, request).await?;
        Ok(())
    }

    /// Call a stored procedure with named parameters
    pub async fn rpc<T: DeserializeOwned, P: Serialize + ?Sized>(&self, function: &str, params: &P) -> ClientResult<T> {
        let path = format!("rpc/{}", function);
        let request = self.request(Method::POST, &path).json(params);
        self.send("rpc", function, request).await
    }

    async fn send<T: DeserializeOwned>(&self, op: &str, target: &str, request: RequestBuilder) -> ClientResult<T> {
        let response = self.dispatch(op, target, request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(op = %op, target = %target, error = %e, "Unexpected response shape");
            ClientError::InvalidResponse(format!("{} {}: {}", op, target, e))
        })
    }

    async fn dispatch(&self, op: &str, target: &str, request: RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(op = %op, target = %target, error = %e, "Backend request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::debug!(op = %op, target = %target, status = %status, "Backend request ok");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = Self::error_message(status, &text);
        tracing::error!(op = %op, target = %target, status = %status, message = %message, "Backend rejected request");
        Err(ClientError::from_status(status, message))
    }

    fn error_message(status: StatusCode, text: &str) -> String {
        match serde_json::from_str::<BackendErrorBody>(text) {
            Ok(body) => {
                let mut message = body.message;
                if let Some(details) = body.details.filter(|d| !d.is_empty()) {
                    message = format!("{} ({})", message, details);
                }
                if let Some(hint) = body.hint.filter(|h| !h.is_empty()) {
                    message = format!("{}; hint: {}", message, hint);
                }
                message
            }
            Err(_) if text.is_empty() => status.to_string(),
            Err(_) => text.to_string(),
        }
    }
}
