//! Date specification parsing tests

use chrono::NaiveDate;
use todo_scan::validation::parse_date_spec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_date_spec() {
    assert_eq!(parse_date_spec("2025-03-04"), Ok(date(2025, 3, 4)));
}

#[test]
fn test_missing_day_defaults_to_first() {
    assert_eq!(parse_date_spec("2025-06"), Ok(date(2025, 6, 1)));
}

#[test]
fn test_missing_month_and_day_default_to_first() {
    assert_eq!(parse_date_spec("2025"), Ok(date(2025, 1, 1)));
}

#[test]
fn test_year_only_equals_january_first() {
    assert_eq!(parse_date_spec("2025"), parse_date_spec("2025-01-01"));
}

#[test]
fn test_too_many_components_is_an_error() {
    assert!(parse_date_spec("2025-01-01-05").is_err());
}

#[test]
fn test_empty_spec_is_an_error() {
    assert!(parse_date_spec("").is_err());
    assert!(parse_date_spec("   ").is_err());
}

#[test]
fn test_non_numeric_component_is_an_error() {
    assert!(parse_date_spec("soon").is_err());
    assert!(parse_date_spec("2025-xx").is_err());
}

#[test]
fn test_invalid_calendar_value_is_an_error() {
    assert!(parse_date_spec("2025-13").is_err());
    assert!(parse_date_spec("2025-02-30").is_err());
}

#[test]
fn test_error_messages_are_user_facing() {
    let err = parse_date_spec("1-2-3-4").unwrap_err();
    assert!(err.contains("YYYY[-MM[-DD]]"), "unexpected message: {err}");

    let err = parse_date_spec("2025-13").unwrap_err();
    assert!(err.contains("valid calendar date"), "unexpected message: {err}");
}
