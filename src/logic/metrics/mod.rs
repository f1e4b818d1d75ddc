//! Metrics Module - Derived Metrics Aggregator
//!
//! Pure functions over a filtered record subset. Every metric is recomputed
//! from scratch; an empty subset always yields zero counts / zero rates.
//!
//! # Architecture
//! - `types.rs`: output structures
//! - `kpi.rs`: active users, up-level rate, CTR, uplift, time on site
//! - `histograms.rs`: segment, golden hour, top topics
//! - `leadership.rs`: funnel, monthly movement, loyalty, churn
//! - `insights.rs`: topic depth, CTR/duration scatter

pub mod types;
pub mod kpi;
pub mod histograms;
pub mod leadership;
pub mod insights;

pub use types::*;
pub use kpi::{
    active_user_count, average_ctr, average_session_duration, ctr_below_target, ctr_uplift,
    format_duration, kpi_summary, up_level_rate, uplift_from,
};
pub use histograms::{golden_hour_histogram, segment_histogram, top_topics};
pub use leadership::{
    churn_alert, churn_rate, churn_risk_subset, leadership_stats, loyalty_index,
    monthly_movement, segment_funnel,
};
pub use insights::{engagement_sample, topic_engagement_depth};
