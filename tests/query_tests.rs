//! Filter operation tests
mod common;

use chrono::NaiveDate;
use todo_scan::queries;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_important_keeps_only_marked_records() {
    let todos = vec![
        common::todo("Alice; 2025-01-01; urgent!!"),
        common::todo("calm note"),
        common::todo("another one!"),
    ];
    let result = queries::important(todos);
    assert_eq!(
        common::raw_texts(&result),
        ["Alice; 2025-01-01; urgent!!", "another one!"]
    );
}

#[test]
fn test_by_author_matches_case_insensitively() {
    let todos = vec![
        common::todo("Alice; 2025-01-01; hers"),
        common::todo("BOB; 2025-01-02; his"),
        common::todo("alice; 2025-01-03; hers again"),
    ];
    let result = queries::by_author(todos, "ALICE");
    assert_eq!(
        common::raw_texts(&result),
        ["Alice; 2025-01-01; hers", "alice; 2025-01-03; hers again"]
    );
}

#[test]
fn test_by_author_with_no_match_is_empty_not_an_error() {
    let todos = vec![common::todo("Alice; 2025-01-01; hers")];
    assert!(queries::by_author(todos, "nobody").is_empty());
}

#[test]
fn test_by_author_never_matches_unauthored_records() {
    let todos = vec![common::todo("just a note")];
    assert!(queries::by_author(todos, "alice").is_empty());
}

#[test]
fn test_since_threshold_is_inclusive() {
    let todos = vec![
        common::todo("a; 2025-03-04; on the day"),
        common::todo("b; 2025-03-03; day before"),
        common::todo("c; 2025-03-05; day after"),
    ];
    let result = queries::since(todos, date(2025, 3, 4));
    assert_eq!(
        common::raw_texts(&result),
        ["a; 2025-03-04; on the day", "c; 2025-03-05; day after"]
    );
}

#[test]
fn test_since_excludes_undated_records() {
    let todos = vec![
        common::todo("undated note"),
        common::todo("a; 2030-01-01; far future"),
    ];
    let result = queries::since(todos, date(2020, 1, 1));
    assert_eq!(common::raw_texts(&result), ["a; 2030-01-01; far future"]);
}
