//! Filter Types
//!
//! FilterState do UI thay đổi, Filter Engine chỉ đọc.

use serde::{Deserialize, Serialize};

use crate::constants::ALL_SENTINEL;
use crate::logic::records::UserBehaviorRecord;

/// The three filterable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Date,
    Segment,
    Topic,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Date,
        FilterDimension::Segment,
        FilterDimension::Topic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterDimension::Date => "report_date",
            FilterDimension::Segment => "current_segment",
            FilterDimension::Topic => "top_interest_topic",
        }
    }

    /// Record field this dimension constrains
    pub fn value_of<'a>(&self, record: &'a UserBehaviorRecord) -> &'a str {
        match self {
            FilterDimension::Date => &record.report_date,
            FilterDimension::Segment => &record.current_segment,
            FilterDimension::Topic => &record.top_interest_topic,
        }
    }
}

impl std::fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selector values; "all" means no constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub report_date: String,
    pub current_segment: String,
    pub top_interest_topic: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            report_date: ALL_SENTINEL.to_string(),
            current_segment: ALL_SENTINEL.to_string(),
            top_interest_topic: ALL_SENTINEL.to_string(),
        }
    }
}

impl FilterState {
    pub fn get(&self, dimension: FilterDimension) -> &str {
        match dimension {
            FilterDimension::Date => &self.report_date,
            FilterDimension::Segment => &self.current_segment,
            FilterDimension::Topic => &self.top_interest_topic,
        }
    }

    /// Builder-style update of one dimension
    pub fn with(mut self, dimension: FilterDimension, value: impl Into<String>) -> Self {
        let value = value.into();
        match dimension {
            FilterDimension::Date => self.report_date = value,
            FilterDimension::Segment => self.current_segment = value,
            FilterDimension::Topic => self.top_interest_topic = value,
        }
        self
    }

    /// No dimension constrained
    pub fn is_unconstrained(&self) -> bool {
        FilterDimension::ALL.iter().all(|d| self.get(*d) == ALL_SENTINEL)
    }

    /// Exact, case-sensitive match on every constrained dimension
    pub fn matches(&self, record: &UserBehaviorRecord) -> bool {
        FilterDimension::ALL.iter().all(|d| {
            let wanted = self.get(*d);
            wanted == ALL_SENTINEL || wanted == d.value_of(record)
        })
    }
}

/// Selector choice lists, each starting with "all"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub dates: Vec<String>,
    pub segments: Vec<String>,
    pub topics: Vec<String>,
}

impl FilterOptions {
    pub fn get(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Date => &self.dates,
            FilterDimension::Segment => &self.segments,
            FilterDimension::Topic => &self.topics,
        }
    }
}
