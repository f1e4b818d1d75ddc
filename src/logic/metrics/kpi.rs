//! KPI Metrics
//!
//! Active users, up-level rate, CTR & uplift, time on site.

use std::collections::HashSet;

use super::types::KpiSummary;
use crate::constants::{CTR_BASELINE, CTR_TARGET};
use crate::logic::records::UserBehaviorRecord;

/// Distinct masked user ids (not row count)
pub fn active_user_count(records: &[UserBehaviorRecord]) -> usize {
    records
        .iter()
        .map(|r| r.user_id_masked.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Up-level rows divided by distinct users, × 100.
///
/// Rows whose segments do not parse are skipped. The numerator counts rows,
/// the denominator users, so a user with several up-level rows can push the
/// rate above 100%.
pub fn up_level_rate(records: &[UserBehaviorRecord]) -> f64 {
    let users = active_user_count(records);
    if users == 0 {
        return 0.0;
    }
    let up_levels = records.iter().filter(|r| r.is_up_level()).count();
    up_levels as f64 / users as f64 * 100.0
}

/// Mean personalized CTR (percentage points)
pub fn average_ctr(records: &[UserBehaviorRecord]) -> f64 {
    mean(records, |r| r.personalized_ctr)
}

/// `(avg - baseline) / baseline × 100`
pub fn uplift_from(avg_ctr: f64) -> f64 {
    (avg_ctr - CTR_BASELINE) / CTR_BASELINE * 100.0
}

/// CTR uplift of the subset over the fixed baseline; 0 for an empty subset
pub fn ctr_uplift(records: &[UserBehaviorRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    uplift_from(average_ctr(records))
}

/// Average CTR under the health target
pub fn ctr_below_target(avg_ctr: f64) -> bool {
    avg_ctr < CTR_TARGET
}

/// Mean session duration in seconds
pub fn average_session_duration(records: &[UserBehaviorRecord]) -> f64 {
    mean(records, |r| r.avg_session_duration as f64)
}

pub fn kpi_summary(records: &[UserBehaviorRecord]) -> KpiSummary {
    KpiSummary {
        active_users: active_user_count(records),
        up_level_rate: up_level_rate(records),
        avg_ctr: average_ctr(records),
        ctr_uplift: ctr_uplift(records),
        avg_session_duration: average_session_duration(records),
    }
}

/// Seconds as "m:ss"; rounds to whole seconds before splitting.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

fn mean(records: &[UserBehaviorRecord], value: impl Fn(&UserBehaviorRecord) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(value).sum::<f64>() / records.len() as f64
}
