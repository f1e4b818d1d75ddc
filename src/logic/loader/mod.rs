//! Loader Module - Dataset Fetch
//!
//! This module handles:
//! - Reading raw TSV from the configured source (HTTP or file)
//! - Delegating to the records parser
//! - Normalizing every failure into a single `LoadError`
//!
//! Nguyên nhân gốc chỉ được log, người dùng chỉ thấy message cố định.

pub mod client;
pub mod error;

pub use client::{DataSource, SourceClient};
pub use error::{FetchError, LoadError};

use async_trait::async_trait;

use crate::constants;
use crate::logic::records::{parse_records_with_report, UserBehaviorRecord};

/// Loader configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// URL or file path of the TSV dataset
    pub source: String,
    pub timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: constants::get_data_url(),
            timeout_secs: constants::get_fetch_timeout(),
        }
    }
}

impl LoaderConfig {
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

/// Anything that can produce a fresh record set
#[async_trait]
pub trait RecordLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<UserBehaviorRecord>, LoadError>;
}

/// Loader backed by `SourceClient` + TSV parser
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    source: DataSource,
    client: SourceClient,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            source: DataSource::from_location(&config.source),
            client: SourceClient::new(config.timeout_secs),
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }
}

#[async_trait]
impl RecordLoader for DatasetLoader {
    async fn load(&self) -> Result<Vec<UserBehaviorRecord>, LoadError> {
        log::info!("Fetching dataset from {}", self.source);

        let text = self.client.fetch_text(&self.source).await.map_err(|e| {
            log::error!("Failed to fetch or parse data from {}: {}", self.source, e);
            LoadError::new(e)
        })?;

        let report = parse_records_with_report(&text);
        log::info!(
            "Dataset loaded: {} records ({} rows dropped)",
            report.records.len(),
            report.dropped_rows
        );
        Ok(report.records)
    }
}

/// One-shot fetch + parse of `source` with default timeout
pub async fn fetch_records(source: &str) -> Result<Vec<UserBehaviorRecord>, LoadError> {
    DatasetLoader::new(LoaderConfig::with_source(source)).load().await
}
