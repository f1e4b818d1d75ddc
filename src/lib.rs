//! VnX Insight Core - Personalization Monitor data pipeline
//!
//! Ingestion and derived-metrics core behind the personalization dashboard.
//!
//! # Flow
//!
//! ```text
//! loader (HTTP / file) ──► records::parse ──► cache (60s freshness)
//!                                                  │
//!                         filter::apply_filters ◄──┘
//!                                  │
//!                           metrics::* ──► api::views ──► display sinks
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use api::dashboard::DashboardSession;
pub use logic::cache::{Clock, FreshnessCache, SystemClock};
pub use logic::filter::{apply_filters, derive_filter_options, FilterOptions, FilterState};
pub use logic::loader::{
    fetch_records, DataSource, DatasetLoader, FetchError, LoadError, LoaderConfig, RecordLoader,
};
pub use logic::records::{
    parse_records, parse_records_with_report, ParseReport, RecordSet, UserBehaviorRecord,
};

/// Initialize env_logger (RUST_LOG, default "info").
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
