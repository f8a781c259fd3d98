//! Attendance command parsing tests.

use chrono::NaiveDate;

use rollcall::parser::{AttendanceCommandParser, CommandParser, ParseError};

fn usage_error() -> ParseError {
    ParseError::invalid_format(AttendanceCommandParser::USAGE)
}

#[test]
fn attendance_multiple_indexes_and_date() {
    let request = AttendanceCommandParser.parse("1 2 3 d/2024-05-10").unwrap();

    let positions: Vec<_> = request.indexes.iter().map(|i| i.one_based()).collect();
    assert_eq!(positions, [1, 2, 3]);
    assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
}

#[test]
fn attendance_index_order_and_repeats_collapse() {
    let a = AttendanceCommandParser.parse("3 1 2 d/2024-05-10").unwrap();
    let b = AttendanceCommandParser.parse("1 2 2 3 d/2024-05-10").unwrap();
    assert_eq!(a, b);
}

#[test]
fn attendance_missing_date_prefix_fails() {
    assert_eq!(AttendanceCommandParser.parse("1 2 3").unwrap_err(), usage_error());
}

#[test]
fn attendance_empty_preamble_fails() {
    assert_eq!(
        AttendanceCommandParser.parse("d/2024-05-10").unwrap_err(),
        usage_error()
    );
    assert_eq!(AttendanceCommandParser.parse("").unwrap_err(), usage_error());
}

#[test]
fn attendance_malformed_index_gets_usage_not_field_message() {
    for input in ["0 d/2024-05-10", "-2 d/2024-05-10", "one d/2024-05-10", "1.5 d/2024-05-10"] {
        assert_eq!(
            AttendanceCommandParser.parse(input).unwrap_err(),
            usage_error(),
            "input: {input:?}"
        );
    }
}

#[test]
fn attendance_malformed_date_gets_usage_not_field_message() {
    for input in [
        "1 d/2024-02-30",
        "1 d/2024-13-01",
        "1 d/10-05-2024",
        "1 d/2024/05/10",
        "1 d/2024-5-10",
        "1 d/2024-05-1",
        "1 d/",
    ] {
        assert_eq!(
            AttendanceCommandParser.parse(input).unwrap_err(),
            usage_error(),
            "input: {input:?}"
        );
    }
}

#[test]
fn attendance_leap_day_only_in_leap_years() {
    assert!(AttendanceCommandParser.parse("1 d/2024-02-29").is_ok());
    assert_eq!(
        AttendanceCommandParser.parse("1 d/2023-02-29").unwrap_err(),
        usage_error()
    );
}

#[test]
fn attendance_duplicate_date_prefix_fails() {
    assert_eq!(
        AttendanceCommandParser
            .parse("1 d/2024-05-10 d/2024-05-10")
            .unwrap_err(),
        usage_error()
    );
}
