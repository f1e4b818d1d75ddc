//! Record Types
//!
//! Data model cho một dòng dataset hành vi.
//! KHÔNG chứa logic parse - chỉ data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Immutable record set shared between cache, session and sinks
pub type RecordSet = Arc<Vec<UserBehaviorRecord>>;

// ============================================================================
// COLUMN NAMES
// ============================================================================

pub const COL_REPORT_DATE: &str = "report_date";
pub const COL_USER_ID: &str = "user_id_masked";
pub const COL_CURRENT_SEGMENT: &str = "current_segment";
pub const COL_PREVIOUS_SEGMENT: &str = "previous_segment";
pub const COL_TOTAL_SESSIONS: &str = "total_sessions";
pub const COL_AVG_SESSION_DURATION: &str = "avg_session_duration";
pub const COL_PERSONALIZED_CTR: &str = "personalized_ctr";
pub const COL_TOP_INTEREST_TOPIC: &str = "top_interest_topic";
pub const COL_GOLDEN_HOUR: &str = "golden_hour";
pub const COL_IS_CHURN_RISK: &str = "is_churn_risk";

// ============================================================================
// USER BEHAVIOR RECORD
// ============================================================================

/// One row of the behavior dataset. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBehaviorRecord {
    /// ISO-prefixed date, e.g. "2025-11-01"
    pub report_date: String,
    pub user_id_masked: String,
    /// "L<digit>", e.g. "L3"
    pub current_segment: String,
    /// Same format as `current_segment`, may be empty
    pub previous_segment: String,
    pub total_sessions: u32,
    /// Seconds
    pub avg_session_duration: u32,
    /// Percentage points, e.g. 4.5 for 4.5%
    pub personalized_ctr: f64,
    pub top_interest_topic: String,
    /// Hour of day, 0-23
    pub golden_hour: u8,
    pub is_churn_risk: bool,
}

impl UserBehaviorRecord {
    /// Tier number of the current segment ("L4" -> 4)
    pub fn current_tier(&self) -> Option<u32> {
        segment_tier(&self.current_segment)
    }

    /// Tier number of the previous segment
    pub fn previous_tier(&self) -> Option<u32> {
        segment_tier(&self.previous_segment)
    }

    /// Current tier strictly above previous tier.
    /// Rows where either label does not parse are never up-levels.
    pub fn is_up_level(&self) -> bool {
        match (self.current_tier(), self.previous_tier()) {
            (Some(current), Some(previous)) => current > previous,
            _ => false,
        }
    }

    /// "YYYY-MM" bucket of `report_date` (first 7 characters)
    pub fn month_key(&self) -> String {
        self.report_date.chars().take(7).collect()
    }
}

/// Parse a segment label: strip the leading "L", read the integer after it.
///
/// Labels without the "L" prefix or without digits yield `None`.
pub fn segment_tier(label: &str) -> Option<u32> {
    let rest = label.trim().strip_prefix('L')?;
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

// ============================================================================
// PARSE REPORT
// ============================================================================

/// Parse output plus the count of rows skipped for a field-count mismatch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub records: Vec<UserBehaviorRecord>,
    pub dropped_rows: usize,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
