//! Client configuration

use crate::{ClientError, ClientResult, HttpClient};

/// Default customer table
pub const DEFAULT_CUSTOMERS_TABLE: &str = "clientes";

/// Client configuration for connecting to the hosted backend
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MESA_BACKEND_URL | http://localhost:54321 | 后端地址 |
/// | MESA_BACKEND_KEY | (required) | API key |
/// | MESA_REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | MESA_CUSTOMERS_TABLE | clientes | 顾客表 (`clientes` / `contacts`) |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://xyz.supabase.co")
    pub base_url: String,

    /// API key, sent as `apikey` and as bearer token
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Customer table name
    pub customers_table: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: 30,
            customers_table: DEFAULT_CUSTOMERS_TABLE.to_string(),
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> ClientResult<Self> {
        let api_key = std::env::var("MESA_BACKEND_KEY")
            .map_err(|_| ClientError::Config("MESA_BACKEND_KEY is not set".into()))?;
        let base_url = std::env::var("MESA_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:54321".into());

        let mut config = Self::new(base_url, api_key);
        if let Some(timeout) = std::env::var("MESA_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(table) = std::env::var("MESA_CUSTOMERS_TABLE") {
            config.customers_table = table;
        }
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Use another customer table (legacy `contacts`)
    pub fn with_customers_table(mut self, table: impl Into<String>) -> Self {
        self.customers_table = table.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}
