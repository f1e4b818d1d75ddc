//! Behavior Histograms
//!
//! Phân bố theo segment, khung giờ vàng và chủ đề.

use std::collections::HashMap;

use super::types::{HourBucket, SegmentCount, TopicCount};
use crate::constants::{HOURS_PER_DAY, TOP_TOPICS_LIMIT};
use crate::logic::records::UserBehaviorRecord;

/// Row counts per key, in first-occurrence order
pub(crate) fn count_by<'a>(
    records: &'a [UserBehaviorRecord],
    key: impl Fn(&'a UserBehaviorRecord) -> &'a str,
) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }
    counts
}

/// Rows per `current_segment`, sorted by label
pub fn segment_histogram(records: &[UserBehaviorRecord]) -> Vec<SegmentCount> {
    let mut counts: Vec<SegmentCount> = count_by(records, |r| r.current_segment.as_str())
        .into_iter()
        .map(|(segment, users)| SegmentCount {
            segment: segment.to_string(),
            users,
        })
        .collect();
    counts.sort_by(|a, b| a.segment.cmp(&b.segment));
    counts
}

/// Rows per golden hour; always 24 buckets, hour 0 first
pub fn golden_hour_histogram(records: &[UserBehaviorRecord]) -> Vec<HourBucket> {
    let mut counts = [0usize; HOURS_PER_DAY];
    for record in records {
        if let Some(slot) = counts.get_mut(record.golden_hour as usize) {
            *slot += 1;
        }
    }
    counts
        .iter()
        .enumerate()
        .map(|(hour, &users)| HourBucket {
            hour: hour as u8,
            users,
        })
        .collect()
}

/// Most frequent topics, descending; ties keep first-occurrence order
pub fn top_topics(records: &[UserBehaviorRecord]) -> Vec<TopicCount> {
    let mut counts: Vec<TopicCount> = count_by(records, |r| r.top_interest_topic.as_str())
        .into_iter()
        .map(|(topic, users)| TopicCount {
            topic: topic.to_string(),
            users,
        })
        .collect();
    // sort_by is stable
    counts.sort_by(|a, b| b.users.cmp(&a.users));
    counts.truncate(TOP_TOPICS_LIMIT);
    counts
}
