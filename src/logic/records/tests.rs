use super::parser::{parse_bool, parse_float, parse_hour, parse_int};
use super::{parse_records, parse_records_with_report, segment_tier};

const HEADER: &str = "report_date\tuser_id_masked\tcurrent_segment\tprevious_segment\ttotal_sessions\tavg_session_duration\tpersonalized_ctr\ttop_interest_topic\tgolden_hour\tis_churn_risk";

fn tsv(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

#[test]
fn test_parse_sample_row() {
    let text = tsv(&["2025-11-01\tu_abc123\tL4\tL3\t12\t185\t4.8\tCông nghệ\t21\tfalse"]);
    let records = parse_records(&text);

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.report_date, "2025-11-01");
    assert_eq!(r.user_id_masked, "u_abc123");
    assert_eq!(r.current_segment, "L4");
    assert_eq!(r.previous_segment, "L3");
    assert_eq!(r.total_sessions, 12);
    assert_eq!(r.avg_session_duration, 185);
    assert_eq!(r.personalized_ctr, 4.8);
    assert_eq!(r.top_interest_topic, "Công nghệ");
    assert_eq!(r.golden_hour, 21);
    assert!(!r.is_churn_risk);
}

#[test]
fn test_mismatched_rows_dropped_in_order() {
    let text = tsv(&[
        "2025-11-01\tu1\tL3\tL3\t1\t60\t4.0\tThể thao\t8\tfalse",
        "2025-11-01\tu2\tL4\tL3\t2",
        "2025-11-02\tu3\tL5\tL4\t3\t90\t5.0\tKinh doanh\t20\ttrue",
        "2025-11-02\tu4\tL5\tL4\t3\t90\t5.0\tKinh doanh\t20\ttrue\textra",
    ]);
    let report = parse_records_with_report(&text);

    assert_eq!(report.dropped_rows, 2);
    let ids: Vec<&str> = report.records.iter().map(|r| r.user_id_masked.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u3"]);
}

#[test]
fn test_empty_and_header_only_input() {
    assert!(parse_records("").is_empty());
    assert!(parse_records("   \n\t\n  ").is_empty());
    assert!(parse_records(HEADER).is_empty());

    let report = parse_records_with_report(&format!("{}\n", HEADER));
    assert!(report.is_empty());
    assert_eq!(report.dropped_rows, 0);
}

#[test]
fn test_numeric_fallback_to_zero() {
    let text = tsv(&["2025-11-01\tu1\tL3\tL2\tabc\t?\tn/a\tDu lịch\tlate\tfalse"]);
    let records = parse_records(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_sessions, 0);
    assert_eq!(records[0].avg_session_duration, 0);
    assert_eq!(records[0].personalized_ctr, 0.0);
    assert_eq!(records[0].golden_hour, 0);
}

#[test]
fn test_header_names_drive_mapping() {
    let text = "user_id_masked\tis_churn_risk\tcurrent_segment\treport_date\tprevious_segment\ttotal_sessions\tavg_session_duration\tpersonalized_ctr\ttop_interest_topic\tgolden_hour\n\
                u9\tTRUE\tL5\t2025-12-03\tL4\t7\t300\t6.25\tSức khỏe\t22";
    let records = parse_records(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id_masked, "u9");
    assert!(records[0].is_churn_risk);
    assert_eq!(records[0].report_date, "2025-12-03");
    assert_eq!(records[0].golden_hour, 22);
}

#[test]
fn test_missing_column_reads_empty() {
    let text = "report_date\tuser_id_masked\tcurrent_segment\n2025-11-01\tu1\tL3";
    let records = parse_records(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].previous_segment, "");
    assert_eq!(records[0].total_sessions, 0);
    assert!(!records[0].is_churn_risk);
}

#[test]
fn test_whitespace_and_crlf_trimmed() {
    let text = format!(
        "{}\r\n  2025-11-01 \t u1 \tL3\t\t 4 \t 120 \t 3.5 \t Giải trí \t 9 \t True \r\n",
        HEADER
    );
    let records = parse_records(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id_masked, "u1");
    assert_eq!(records[0].previous_segment, "");
    assert_eq!(records[0].top_interest_topic, "Giải trí");
    assert_eq!(records[0].total_sessions, 4);
    assert!(records[0].is_churn_risk);
}

#[test]
fn test_empty_trailing_field_kept() {
    // Empty churn flag at end of line must not shrink the field count
    let text = tsv(&["2025-11-01\tu1\tL3\tL3\t1\t60\t4.0\tThể thao\t8\t"]);
    let records = parse_records(&text);

    assert_eq!(records.len(), 1);
    assert!(!records[0].is_churn_risk);
}

#[test]
fn test_empty_trailing_field_independent_of_position() {
    let row = "2025-11-01\tu1\tL3\tL3\t1\t60\t4.0\tThể thao\t8\t";
    let other = "2025-11-02\tu2\tL4\tL3\t2\t90\t5.0\tKinh doanh\t9\ttrue";

    let last = parse_records_with_report(&format!("{}\n", tsv(&[other, row])));
    assert_eq!(last.records.len(), 2);
    assert_eq!(last.dropped_rows, 0);
    assert_eq!(last.records[1].user_id_masked, "u1");

    let middle = parse_records_with_report(&tsv(&[row, other]));
    assert_eq!(middle.records.len(), 2);
    assert_eq!(middle.dropped_rows, 0);
    assert_eq!(middle.records[0].user_id_masked, "u1");
}

#[test]
fn test_bool_parsing() {
    assert!(parse_bool("true"));
    assert!(parse_bool("TRUE"));
    assert!(parse_bool("True"));
    assert!(!parse_bool("1"));
    assert!(!parse_bool("yes"));
    assert!(!parse_bool(""));
    assert!(!parse_bool("false"));
}

#[test]
fn test_lenient_numbers() {
    assert_eq!(parse_int("12"), 12);
    assert_eq!(parse_int("12abc"), 12);
    assert_eq!(parse_int("3.7"), 3);
    assert_eq!(parse_int("-5"), 0);
    assert_eq!(parse_int("99999999999"), 0);

    assert_eq!(parse_float("4.8"), 4.8);
    assert_eq!(parse_float("4.8%"), 4.8);
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("-1.0"), 0.0);
    assert_eq!(parse_float("NaN"), 0.0);

    assert_eq!(parse_hour("23"), 23);
    assert_eq!(parse_hour("24"), 0);
}

#[test]
fn test_segment_tier() {
    assert_eq!(segment_tier("L3"), Some(3));
    assert_eq!(segment_tier("L10"), Some(10));
    assert_eq!(segment_tier("3"), None);
    assert_eq!(segment_tier(""), None);
    assert_eq!(segment_tier("Lx"), None);
}
