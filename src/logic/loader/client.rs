//! Data Source Client
//!
//! Đọc raw text từ HTTP(S) URL hoặc file local.

use std::path::PathBuf;
use std::time::Duration;

use super::error::FetchError;

/// Where the dataset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` / `https://` are fetched over HTTP, anything else is a file path
    /// (an optional `file://` prefix is stripped).
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Http(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            DataSource::File(PathBuf::from(path))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// Thin reader over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct SourceClient {
    http_client: reqwest::Client,
}

impl SourceClient {
    pub fn new(timeout_secs: u64) -> Self {
        let http_client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                log::warn!("HTTP client builder failed ({}), using defaults", e);
                reqwest::Client::new()
            }
        };

        Self { http_client }
    }

    /// Read the full source as text
    pub async fn fetch_text(&self, source: &DataSource) -> Result<String, FetchError> {
        match source {
            DataSource::Http(url) => self.fetch_http(url).await,
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| FetchError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    async fn fetch_http(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
