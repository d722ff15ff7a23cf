use roster_core::errors::{ExError, ExErrorKind, RosterError};

#[test]
fn test_invalid_year_verifiable_by_kind() {
    let err = RosterError::InvalidYear { year: 1999 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Validation);
    assert_eq!(ex_err.code(), "ERR_VALIDATION");
    assert_eq!(ex_err.op(), Some("set_year"));
    assert_eq!(ex_err.entity_id(), None);
    assert!(ex_err.message().contains("1999"));
    assert!(ex_err.message().contains("2000"));
    assert!(!ex_err.to_string().contains("entity_id"));
}

#[test]
fn test_unknown_employee_structured_fields() {
    let err = RosterError::UnknownEmployee { employee_id: 99999 };

    let ex_err: ExError = err.into();

    assert!(ex_err.is_validation());
    assert_eq!(ex_err.op(), Some("set_employee_id"));
    assert_eq!(ex_err.entity_id(), Some("99999"));
    assert!(ex_err.message().contains("existing Employee"));
}

#[test]
fn test_invalid_summary_message() {
    let err = RosterError::InvalidSummary {
        reason: "Summary cannot be empty".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Validation);
    assert!(ex_err.message().contains("Invalid summary"));
}

#[test]
fn test_review_not_cached_is_not_found() {
    let err = RosterError::ReviewNotCached { review_id: 12 };
    assert!(!err.is_validation());

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("12"));
}

#[test]
fn test_storage_errors_pass_through_unchanged() {
    let storage = ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message("database is locked");

    let wrapped: RosterError = storage.clone().into();
    assert_eq!(wrapped.to_string(), storage.to_string());

    let ex_err: ExError = wrapped.into();
    assert_eq!(ex_err, storage);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Validation, "ERR_VALIDATION"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serde_json_error_maps_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let ex_err: ExError = json_err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert!(!ex_err.message().is_empty());
}
