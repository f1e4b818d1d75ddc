//! Deep Insights
//!
//! Ma trận hiệu quả nội dung (CTR vs thời lượng đọc) và độ sâu tương tác theo chủ đề.

use std::collections::HashMap;

use super::histograms::count_by;
use super::types::{EngagementPoint, TopicDepth};
use crate::constants::{ENGAGEMENT_SAMPLE_LIMIT, TOPIC_DEPTH_LIMIT};
use crate::logic::records::UserBehaviorRecord;

/// Per topic: rows and rounded mean duration, most popular first
pub fn topic_engagement_depth(records: &[UserBehaviorRecord]) -> Vec<TopicDepth> {
    let mut durations: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *durations.entry(record.top_interest_topic.as_str()).or_insert(0) +=
            record.avg_session_duration as u64;
    }

    let mut depth: Vec<TopicDepth> = count_by(records, |r| r.top_interest_topic.as_str())
        .into_iter()
        .map(|(topic, users)| {
            let total = durations.get(topic).copied().unwrap_or(0);
            TopicDepth {
                topic: topic.to_string(),
                users,
                avg_duration: (total as f64 / users as f64).round() as u64,
            }
        })
        .collect();
    depth.sort_by(|a, b| b.users.cmp(&a.users));
    depth.truncate(TOPIC_DEPTH_LIMIT);
    depth
}

/// First rows of the subset as scatter points (duration in minutes)
pub fn engagement_sample(records: &[UserBehaviorRecord]) -> Vec<EngagementPoint> {
    records
        .iter()
        .take(ENGAGEMENT_SAMPLE_LIMIT)
        .map(|r| EngagementPoint {
            user_id: r.user_id_masked.clone(),
            segment: r.current_segment.clone(),
            ctr: r.personalized_ctr,
            minutes: r.avg_session_duration as f64 / 60.0,
        })
        .collect()
}
