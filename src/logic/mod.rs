//! Logic Module - Ingestion & Metrics Engines
//!
//! Chứa các engine xử lý dữ liệu hành vi người dùng.
//!
//! ## Pipeline
//! - `records/` - TSV parsing into typed `UserBehaviorRecord`s
//! - `loader/` - Fetch raw text (HTTP or local file), normalize failures
//! - `cache/` - Single-snapshot freshness cache with injected clock
//! - `filter/` - Equality filters and selector option sets
//! - `metrics/` - KPI, histograms, funnel, trend, loyalty, insights

pub mod records;
pub mod loader;
pub mod cache;
pub mod filter;
pub mod metrics;
