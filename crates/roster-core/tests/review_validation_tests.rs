mod common;

use common::{empty_directory, staff_directory, KNOWN_EMPLOYEES};
use proptest::prelude::*;
use roster_core::errors::{ExError, ExErrorKind};
use roster_core::{Result, Review, RosterError};

// ===== CONSTRUCTION =====

#[test]
fn test_new_review_exposes_inputs() {
    let directory = staff_directory();
    let review = Review::new(2022, "Great work", 1, &directory).unwrap();

    assert_eq!(review.year(), 2022);
    assert_eq!(review.summary(), "Great work");
    assert_eq!(review.employee_id(), 1);
    assert_eq!(review.id(), None);
}

#[test]
fn test_new_review_fails_on_year_before_2000() {
    let directory = staff_directory();
    let result = Review::new(1999, "Great work", 1, &directory);

    match result {
        Err(RosterError::InvalidYear { year }) => assert_eq!(year, 1999),
        other => panic!("Expected InvalidYear error, got {:?}", other),
    }
}

#[test]
fn test_new_review_fails_on_empty_summary() {
    let directory = staff_directory();
    let result = Review::new(2022, "", 1, &directory);

    match result {
        Err(RosterError::InvalidSummary { reason }) => assert!(reason.contains("empty")),
        other => panic!("Expected InvalidSummary error, got {:?}", other),
    }
}

#[test]
fn test_new_review_fails_on_whitespace_summary() {
    let directory = staff_directory();
    let result = Review::new(2022, "   ", 1, &directory);

    assert!(matches!(result, Err(RosterError::InvalidSummary { .. })));
}

#[test]
fn test_new_review_fails_on_unknown_employee() {
    let directory = staff_directory();
    let result = Review::new(2022, "Great work", 99999, &directory);

    assert!(matches!(
        result,
        Err(RosterError::UnknownEmployee { employee_id: 99999 })
    ));
}

#[test]
fn test_new_review_fails_when_directory_is_empty() {
    let result = Review::new(2022, "Great work", 1, &empty_directory());
    assert!(matches!(result, Err(RosterError::UnknownEmployee { .. })));
}

#[test]
fn test_year_is_checked_before_directory() {
    // Every field is invalid; the year error wins
    let result = Review::new(1990, "", 99999, &empty_directory());
    assert!(matches!(result, Err(RosterError::InvalidYear { .. })));
}

// ===== MUTATION =====

#[test]
fn test_invalid_summary_leaves_previous_value() {
    let directory = staff_directory();
    let mut review = Review::new(2022, "Great work", 1, &directory).unwrap();

    let result = review.set_summary("");

    assert!(result.is_err());
    assert_eq!(review.summary(), "Great work");
}

#[test]
fn test_employee_removed_after_construction_blocks_reassignment_only() {
    let mut directory = staff_directory();
    let mut review = Review::new(2022, "Great work", 2, &directory).unwrap();

    directory.remove(3);

    // Existing value stays; only new assignments are checked
    assert_eq!(review.employee_id(), 2);
    assert!(review.set_employee_id(3, &directory).is_err());
    assert!(review.set_employee_id(1, &directory).is_ok());
}

// ===== ERROR FACILITY MAPPING =====

#[test]
fn test_validation_errors_map_to_validation_kind() {
    let directory = staff_directory();
    let failures: Vec<RosterError> = vec![
        Review::new(1999, "ok", 1, &directory).unwrap_err(),
        Review::new(2020, " ", 1, &directory).unwrap_err(),
        Review::new(2020, "ok", 404, &directory).unwrap_err(),
    ];

    for failure in failures {
        assert!(failure.is_validation());
        let ex_err: ExError = failure.into();
        assert_eq!(ex_err.kind(), ExErrorKind::Validation);
        assert_eq!(ex_err.code(), "ERR_VALIDATION");
    }
}

// ===== PROPERTIES =====

fn build(year: i64, summary: &str, employee_id: i64) -> Result<Review> {
    Review::new(year, summary, employee_id, &staff_directory())
}

proptest! {
    #[test]
    fn prop_valid_inputs_round_trip(
        year in 2000i64..=9999,
        summary in "[A-Za-z][A-Za-z ,.!]{0,40}",
        idx in 0usize..KNOWN_EMPLOYEES.len(),
    ) {
        let employee_id = KNOWN_EMPLOYEES[idx];
        let review = build(year, &summary, employee_id).unwrap();
        prop_assert_eq!(review.year(), year);
        prop_assert_eq!(review.summary(), summary.as_str());
        prop_assert_eq!(review.employee_id(), employee_id);
    }

    #[test]
    fn prop_years_before_2000_rejected(year in i64::MIN..2000) {
        let is_invalid_year = matches!(
            build(year, "Great work", 1),
            Err(RosterError::InvalidYear { .. })
        );
        prop_assert!(is_invalid_year);
    }

    #[test]
    fn prop_blank_summaries_rejected(summary in "[ \t\n\r]{0,12}") {
        let is_invalid_summary = matches!(
            build(2022, &summary, 1),
            Err(RosterError::InvalidSummary { .. })
        );
        prop_assert!(is_invalid_summary);
    }

    #[test]
    fn prop_unknown_employees_rejected(employee_id in 4i64..1_000_000) {
        let is_unknown = matches!(
            build(2022, "Great work", employee_id),
            Err(RosterError::UnknownEmployee { .. })
        );
        prop_assert!(is_unknown);
    }

    #[test]
    fn prop_failed_set_year_is_all_or_nothing(year in i64::MIN..2000) {
        let mut review = build(2022, "Great work", 1).unwrap();
        prop_assert!(review.set_year(year).is_err());
        prop_assert_eq!(review.year(), 2022);
    }
}
