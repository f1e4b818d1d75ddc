//! Display Views
//!
//! Giá trị đã format sẵn cho các display sink (KPI card, chart, bảng cảnh báo).

use serde::Serialize;

use crate::logic::metrics::{
    self, EngagementPoint, FunnelStage, KpiSummary, LeadershipStats, MovementPoint, SegmentCount,
    TopicCount, TopicDepth,
};
use crate::logic::records::UserBehaviorRecord;

// ============================================================================
// VIEW STATE
// ============================================================================

/// What the dashboard body should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// Nothing loaded yet, nothing running
    Idle,
    /// First load in progress
    Loading,
    /// No data and the last load failed
    Failed { message: String },
    /// Data available; `error` is set when the latest refresh failed
    Ready { error: Option<String> },
}

// ============================================================================
// OVERVIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiView {
    pub total_users: String,
    pub up_level_rate: String,
    pub avg_ctr: String,
    pub ctr_below_target: bool,
    pub ctr_uplift: String,
    pub avg_time_on_site: String,
}

impl From<&KpiSummary> for KpiView {
    fn from(kpi: &KpiSummary) -> Self {
        Self {
            total_users: group_thousands(kpi.active_users),
            up_level_rate: format!("{:.1}%", kpi.up_level_rate),
            avg_ctr: format!("{:.2}%", kpi.avg_ctr),
            ctr_below_target: metrics::ctr_below_target(kpi.avg_ctr),
            ctr_uplift: format!("{:+.1}%", kpi.ctr_uplift),
            avg_time_on_site: metrics::format_duration(kpi.avg_session_duration),
        }
    }
}

// ============================================================================
// DEEP DIVE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourView {
    /// "21h"
    pub label: String,
    pub users: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepDiveView {
    pub segments: Vec<SegmentCount>,
    pub golden_hours: Vec<HourView>,
    pub top_topics: Vec<TopicCount>,
}

impl DeepDiveView {
    pub fn build(records: &[UserBehaviorRecord]) -> Self {
        Self {
            segments: metrics::segment_histogram(records),
            golden_hours: metrics::golden_hour_histogram(records)
                .into_iter()
                .map(|b| HourView {
                    label: format!("{}h", b.hour),
                    users: b.users,
                })
                .collect(),
            top_topics: metrics::top_topics(records),
        }
    }
}

// ============================================================================
// LEADERSHIP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadershipView {
    pub loyalty_index: String,
    pub churn_rate: String,
    pub churn_alert: bool,
    pub funnel: Vec<FunnelStage>,
    pub movement: Vec<MovementPoint>,
}

impl LeadershipView {
    pub fn build(records: &[UserBehaviorRecord]) -> Self {
        let LeadershipStats { loyalty_index, churn_rate } = metrics::leadership_stats(records);
        Self {
            loyalty_index: format!("{:.0}", loyalty_index),
            churn_rate: format!("{:.1}%", churn_rate),
            churn_alert: metrics::churn_alert(churn_rate),
            funnel: metrics::segment_funnel(records),
            movement: metrics::monthly_movement(records),
        }
    }
}

// ============================================================================
// INSIGHTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub engagement: Vec<EngagementPoint>,
    pub topic_depth: Vec<TopicDepth>,
}

impl InsightsView {
    pub fn build(records: &[UserBehaviorRecord]) -> Self {
        Self {
            engagement: metrics::engagement_sample(records),
            topic_depth: metrics::topic_engagement_depth(records),
        }
    }
}

// ============================================================================
// ALERTS
// ============================================================================

/// Row of the churn-risk table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRow {
    pub user_id: String,
    pub segment: String,
    pub ctr: String,
    pub topic: String,
}

impl From<&UserBehaviorRecord> for AlertRow {
    fn from(r: &UserBehaviorRecord) -> Self {
        Self {
            user_id: r.user_id_masked.clone(),
            segment: r.current_segment.clone(),
            ctr: format!("{:.2}", r.personalized_ctr),
            topic: r.top_interest_topic.clone(),
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Serialize any view for a JS/webview sink
pub fn to_json<T: Serialize>(view: &T) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
