//! Leadership Metrics
//!
//! Funnel L3/L4/L5, xu hướng thăng hạng theo tháng, loyalty index, churn.

use std::collections::BTreeMap;

use super::types::{FunnelStage, LeadershipStats, MovementPoint};
use crate::constants::CHURN_ALERT_RATE;
use crate::logic::records::UserBehaviorRecord;

/// Funnel stages: (segment, display label)
const FUNNEL_STAGES: [(&str, &str); 3] = [
    ("L3", "Trung thành (L3)"),
    ("L4", "Chủ chốt (L4)"),
    ("L5", "Đại sứ (L5)"),
];

/// Rows flagged as churn risk, unchanged and in order
pub fn churn_risk_subset(records: &[UserBehaviorRecord]) -> Vec<UserBehaviorRecord> {
    records.iter().filter(|r| r.is_churn_risk).cloned().collect()
}

/// Churn-risk rows / rows × 100
pub fn churn_rate(records: &[UserBehaviorRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let at_risk = records.iter().filter(|r| r.is_churn_risk).count();
    at_risk as f64 / records.len() as f64 * 100.0
}

pub fn churn_alert(rate: f64) -> bool {
    rate > CHURN_ALERT_RATE
}

/// Row counts for exactly "L3", "L4", "L5"; other segments ignored
pub fn segment_funnel(records: &[UserBehaviorRecord]) -> Vec<FunnelStage> {
    FUNNEL_STAGES
        .iter()
        .map(|(segment, label)| FunnelStage {
            segment: segment.to_string(),
            label: label.to_string(),
            value: records.iter().filter(|r| r.current_segment == *segment).count(),
        })
        .collect()
}

/// L3→L4 / L3→L5 transitions per "YYYY-MM", ascending by month
pub fn monthly_movement(records: &[UserBehaviorRecord]) -> Vec<MovementPoint> {
    let mut months: BTreeMap<String, MovementPoint> = BTreeMap::new();

    for record in records {
        let month = record.month_key();
        let point = months.entry(month.clone()).or_insert_with(|| MovementPoint {
            month,
            ..Default::default()
        });

        if record.previous_segment == "L3" {
            match record.current_segment.as_str() {
                "L4" => point.l3_to_l4 += 1,
                "L5" => point.l3_to_l5 += 1,
                _ => {}
            }
        }
        if record.is_up_level() {
            point.up_levels += 1;
        }
    }

    months.into_values().collect()
}

/// Σ(total_sessions × avg_session_duration) / (rows × 10)
///
/// Illustrative composite, not a validated metric.
pub fn loyalty_index(records: &[UserBehaviorRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: u64 = records
        .iter()
        .map(|r| r.total_sessions as u64 * r.avg_session_duration as u64)
        .sum();
    total as f64 / (records.len() as f64 * 10.0)
}

pub fn leadership_stats(records: &[UserBehaviorRecord]) -> LeadershipStats {
    LeadershipStats {
        loyalty_index: loyalty_index(records),
        churn_rate: churn_rate(records),
    }
}
