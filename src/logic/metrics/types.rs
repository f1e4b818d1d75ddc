//! Metrics Types
//!
//! Output structures của Metrics Aggregator.
//! Tính lại toàn bộ mỗi lần filter thay đổi, không cache, không mutate.

use serde::{Deserialize, Serialize};

// ============================================================================
// KPI
// ============================================================================

/// Overview tab headline numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Distinct `user_id_masked`
    pub active_users: usize,
    /// Up-level rows / active users × 100
    pub up_level_rate: f64,
    pub avg_ctr: f64,
    /// Relative to `CTR_BASELINE`, in percent
    pub ctr_uplift: f64,
    /// Seconds
    pub avg_session_duration: f64,
}

// ============================================================================
// HISTOGRAMS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCount {
    pub segment: String,
    pub users: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: u8,
    pub users: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub users: usize,
}

// ============================================================================
// LEADERSHIP VIEW
// ============================================================================

/// One bar of the L3/L4/L5 funnel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub segment: String,
    pub label: String,
    pub value: usize,
}

/// Per-month segment movement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementPoint {
    /// "YYYY-MM"
    pub month: String,
    pub l3_to_l4: usize,
    pub l3_to_l5: usize,
    /// Any tier increase within the month
    pub up_levels: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadershipStats {
    /// Placeholder heuristic: Σ(sessions × duration) / (rows × 10)
    pub loyalty_index: f64,
    /// Churn-risk rows / rows × 100
    pub churn_rate: f64,
}

// ============================================================================
// DEEP INSIGHTS
// ============================================================================

/// Popularity vs. reading depth of a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDepth {
    pub topic: String,
    pub users: usize,
    /// Seconds, rounded
    pub avg_duration: u64,
}

/// One dot of the CTR / reading-time scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub user_id: String,
    pub segment: String,
    pub ctr: f64,
    pub minutes: f64,
}
