//! TSV Record Parser
//!
//! Header row định nghĩa mapping tên cột -> vị trí.
//! Dòng có số field khác header bị bỏ qua (silent-skip), không bao giờ lỗi.

use std::collections::HashMap;

use super::types::*;

const FIELD_SEPARATOR: char = '\t';

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Positions of the known columns inside a header row
struct ColumnMap {
    width: usize,
    positions: HashMap<String, usize>,
}

impl ColumnMap {
    fn from_header(header: &str) -> Self {
        let names: Vec<&str> = header.split(FIELD_SEPARATOR).map(str::trim).collect();
        let mut positions = HashMap::with_capacity(names.len());
        // Duplicate names: last occurrence wins
        for (index, name) in names.iter().enumerate() {
            positions.insert((*name).to_string(), index);
        }

        Self {
            width: names.len(),
            positions,
        }
    }

    /// Field value for `column`, or "" if the header has no such column
    fn get<'a>(&self, fields: &[&'a str], column: &str) -> &'a str {
        self.positions
            .get(column)
            .and_then(|&i| fields.get(i).copied())
            .unwrap_or("")
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse raw TSV text into records, in source row order.
pub fn parse_records(text: &str) -> Vec<UserBehaviorRecord> {
    parse_records_with_report(text).records
}

/// Parse raw TSV text and report how many rows were dropped.
pub fn parse_records_with_report(text: &str) -> ParseReport {
    if text.trim().is_empty() {
        return ParseReport::default();
    }
    let text = trim_line(text);

    let mut lines = text.split('\n').map(trim_line);
    let header = match lines.next() {
        Some(h) if !h.is_empty() => h,
        _ => return ParseReport::default(),
    };
    let columns = ColumnMap::from_header(header);

    let mut report = ParseReport::default();
    for line in lines {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != columns.width {
            report.dropped_rows += 1;
            continue;
        }
        report.records.push(build_record(&columns, &fields));
    }

    if report.dropped_rows > 0 {
        log::warn!(
            "Parsed {} records, dropped {} malformed rows",
            report.records.len(),
            report.dropped_rows
        );
    } else {
        log::debug!("Parsed {} records", report.records.len());
    }

    report
}

// ============================================================================
// FIELD CONVERSION
// ============================================================================

fn build_record(columns: &ColumnMap, fields: &[&str]) -> UserBehaviorRecord {
    UserBehaviorRecord {
        report_date: columns.get(fields, COL_REPORT_DATE).to_string(),
        user_id_masked: columns.get(fields, COL_USER_ID).to_string(),
        current_segment: columns.get(fields, COL_CURRENT_SEGMENT).to_string(),
        previous_segment: columns.get(fields, COL_PREVIOUS_SEGMENT).to_string(),
        total_sessions: parse_int(columns.get(fields, COL_TOTAL_SESSIONS)),
        avg_session_duration: parse_int(columns.get(fields, COL_AVG_SESSION_DURATION)),
        personalized_ctr: parse_float(columns.get(fields, COL_PERSONALIZED_CTR)),
        top_interest_topic: columns.get(fields, COL_TOP_INTEREST_TOPIC).to_string(),
        golden_hour: parse_hour(columns.get(fields, COL_GOLDEN_HOUR)),
        is_churn_risk: parse_bool(columns.get(fields, COL_IS_CHURN_RISK)),
    }
}

/// Trim surrounding whitespace but keep tabs, so empty edge fields survive.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() && c != FIELD_SEPARATOR)
}

/// Leading decimal integer of the value; 0 when absent, negative or overflowing.
pub(crate) fn parse_int(raw: &str) -> u32 {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..end].parse().unwrap_or(0)
}

/// Longest leading decimal number of the value; 0 when absent or negative.
pub(crate) fn parse_float(raw: &str) -> f64 {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in raw.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }

    match raw[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Hour of day 0-23; anything else falls back to 0.
pub(crate) fn parse_hour(raw: &str) -> u8 {
    let hour = parse_int(raw);
    if hour < 24 {
        hour as u8
    } else {
        0
    }
}

/// True iff the value equals "true" ignoring case.
pub(crate) fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}
