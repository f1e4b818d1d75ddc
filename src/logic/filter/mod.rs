//! Filter Module - Equality Filters & Option Sets
//!
//! Pure functions, không side effect:
//! - `apply_filters`: stable AND-filter over date / segment / topic
//! - `derive_filter_options`: distinct values per dimension, first-seen order

pub mod types;

pub use types::{FilterDimension, FilterOptions, FilterState};

use std::collections::HashSet;

use crate::constants::ALL_SENTINEL;
use crate::logic::records::UserBehaviorRecord;

/// Records matching every constrained dimension, in input order
pub fn apply_filters(records: &[UserBehaviorRecord], state: &FilterState) -> Vec<UserBehaviorRecord> {
    if state.is_unconstrained() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| state.matches(r))
        .cloned()
        .collect()
}

/// "all" followed by the distinct observed values of each dimension
pub fn derive_filter_options(records: &[UserBehaviorRecord]) -> FilterOptions {
    FilterOptions {
        dates: distinct_values(records, FilterDimension::Date),
        segments: distinct_values(records, FilterDimension::Segment),
        topics: distinct_values(records, FilterDimension::Topic),
    }
}

fn distinct_values(records: &[UserBehaviorRecord], dimension: FilterDimension) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = vec![ALL_SENTINEL.to_string()];
    for record in records {
        let value = dimension.value_of(record);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}
