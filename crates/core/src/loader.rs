//! # Catalog Loader
//!
//! Fetches the full catalog from the remote endpoint. One unauthenticated GET,
//! no parameters, no pagination.
//!
//! ## Configuration
//! [`LoaderConfig::from_env`] honors:
//! - `EASEL_CATALOG_URL` - endpoint override
//! - `EASEL_CATALOG_TIMEOUT_SECS` - request timeout in seconds

use crate::models::CatalogRecord;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://66e3e37dd2405277ed123139.mockapi.io/android";

/// Errors surfaced by a catalog fetch
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog endpoint returned status {0}")]
    Status(u16),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Opaque async source of catalog records
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Fetch the whole catalog
    async fn fetch(&self) -> Result<Vec<CatalogRecord>, CatalogError>;
}

/// Endpoint settings for [`HttpCatalogLoader`]
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("easel/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("EASEL_CATALOG_URL") {
            config.endpoint = endpoint;
        }

        if let Ok(raw) = std::env::var("EASEL_CATALOG_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid EASEL_CATALOG_TIMEOUT_SECS: {:?}", raw))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Decode a catalog payload (a JSON array of records)
pub fn parse_catalog(payload: &[u8]) -> Result<Vec<CatalogRecord>, CatalogError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Loader backed by the HTTP endpoint
pub struct HttpCatalogLoader {
    client: reqwest::Client,
    config: LoaderConfig,
}

impl HttpCatalogLoader {
    pub fn new(config: LoaderConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Use a preconfigured client; its own timeout and user agent apply
    pub fn with_client(client: reqwest::Client, config: LoaderConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

#[async_trait]
impl CatalogLoader for HttpCatalogLoader {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        let response = self.client.get(&self.config.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.config.endpoint,
                status = status.as_u16(),
                "Catalog endpoint rejected request"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let payload = response.bytes().await?;
        let records = parse_catalog(&payload)?;
        tracing::info!(endpoint = %self.config.endpoint, count = records.len(), "Fetched catalog");
        Ok(records)
    }
}

/// Loader returning a fixed in-memory catalog, or a fixed failure
#[derive(Debug, Clone)]
pub struct StaticCatalogLoader {
    outcome: Result<Vec<CatalogRecord>, String>,
}

impl StaticCatalogLoader {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    /// A loader whose every fetch fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[async_trait]
impl CatalogLoader for StaticCatalogLoader {
    async fn fetch(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.outcome
            .clone()
            .map_err(CatalogError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one raw HTTP response on a local port, returning its URL
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/android", addr)
    }

    fn local_loader(endpoint: String) -> HttpCatalogLoader {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpCatalogLoader::with_client(client, LoaderConfig::default().with_endpoint(endpoint))
    }

    const PAYLOAD: &str = r#"[
        {"id": "1", "artName": "Red Brush", "price": 12, "description": "", "glassSurface": false,
         "image": "https://img.example/1.png", "brand": "Acme", "limitedTimeDeal": 0.1},
        {"id": "2", "artName": "Blue Brush", "price": 9.5, "description": "", "glassSurface": true,
         "image": "https://img.example/2.png", "brand": "Zeta", "limitedTimeDeal": 0}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let records = parse_catalog(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].brand, "Zeta");
        assert_eq!(records[0].price_label(), "$12");
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        let err = parse_catalog(br#"{"id": "1"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.endpoint, DEFAULT_CATALOG_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("easel/"));
    }

    #[test]
    fn test_config_builders() {
        let config = LoaderConfig::default()
            .with_endpoint("http://localhost:8080/catalog")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.endpoint, "http://localhost:8080/catalog");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_config_from_env() {
        std::env::remove_var("EASEL_CATALOG_URL");
        std::env::remove_var("EASEL_CATALOG_TIMEOUT_SECS");
        let config = LoaderConfig::from_env().unwrap();
        assert_eq!(config.endpoint, DEFAULT_CATALOG_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));

        std::env::set_var("EASEL_CATALOG_URL", "http://localhost:9000/catalog");
        std::env::set_var("EASEL_CATALOG_TIMEOUT_SECS", " 3 ");
        let config = LoaderConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/catalog");
        assert_eq!(config.timeout, Duration::from_secs(3));

        std::env::set_var("EASEL_CATALOG_TIMEOUT_SECS", "soon");
        let err = LoaderConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("EASEL_CATALOG_TIMEOUT_SECS"));

        std::env::remove_var("EASEL_CATALOG_URL");
        std::env::remove_var("EASEL_CATALOG_TIMEOUT_SECS");
    }

    #[tokio::test]
    async fn test_http_loader_fetches_catalog() {
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            PAYLOAD.len(),
            PAYLOAD
        );
        let loader = local_loader(serve_once(response).await);

        let records = loader.fetch().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Red Brush");
    }

    #[tokio::test]
    async fn test_http_loader_rejects_error_status() {
        let response = "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n";
        let loader = local_loader(serve_once(response.to_string()).await);

        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(500)));
        assert_eq!(err.to_string(), "catalog endpoint returned status 500");
    }

    #[test]
    fn test_static_loader() {
        let loader = StaticCatalogLoader::new(parse_catalog(PAYLOAD.as_bytes()).unwrap());
        let records = tokio_test::block_on(loader.fetch()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_failing_loader() {
        let loader = StaticCatalogLoader::failing("offline");
        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(ref reason) if reason == "offline"));
        assert_eq!(err.to_string(), "catalog unavailable: offline");
    }

    #[test]
    fn test_http_loader_builds() {
        let loader = HttpCatalogLoader::new(LoaderConfig::default()).unwrap();
        assert_eq!(loader.config().endpoint, DEFAULT_CATALOG_URL);
    }
}
