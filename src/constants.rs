//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Data source can be overridden via environment, everything else is fixed.

/// Default dataset URL (TSV export)
///
/// This is the fallback URL when no environment variable is set.
/// Local files are accepted too: `file:///path/data.tsv` or a plain path.
pub const DEFAULT_DATA_URL: &str = "https://data.vnexpress.net/personalization/user_behavior.tsv";

/// Default HTTP timeout for a dataset fetch (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// A cached snapshot younger than this is served without I/O (ms)
pub const FRESHNESS_WINDOW_MS: i64 = 60_000;

/// User-facing message for any load failure
pub const LOAD_ERROR_MESSAGE: &str = "Không thể tải dữ liệu, vui lòng kiểm tra đường truyền";

/// Filter sentinel meaning "no constraint"
pub const ALL_SENTINEL: &str = "all";

// ============================================
// Metric thresholds
// ============================================

/// Non-personalized CTR baseline (percentage points)
pub const CTR_BASELINE: f64 = 3.5;

/// Average CTR below this is shown as unhealthy
pub const CTR_TARGET: f64 = 4.2;

/// Churn rate (%) above this is shown as an alert
pub const CHURN_ALERT_RATE: f64 = 15.0;

/// Top-topics histogram length
pub const TOP_TOPICS_LIMIT: usize = 5;

/// Topic engagement depth chart length
pub const TOPIC_DEPTH_LIMIT: usize = 8;

/// Rows plotted on the CTR/duration scatter
pub const ENGAGEMENT_SAMPLE_LIMIT: usize = 100;

/// Hour buckets in the golden-hour histogram
pub const HOURS_PER_DAY: usize = 24;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get dataset location from environment or use default
pub fn get_data_url() -> String {
    std::env::var("DASHBOARD_DATA_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Get fetch timeout from environment or use default
pub fn get_fetch_timeout() -> u64 {
    std::env::var("DASHBOARD_FETCH_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
}
