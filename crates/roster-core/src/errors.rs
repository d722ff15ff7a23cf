use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Field validation
    Validation,
    InvalidInput,

    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Config,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity id, message) for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// True for field validation failures
    pub fn is_validation(&self) -> bool {
        self.kind == ExErrorKind::Validation
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for review records
///
/// The validation variants are the only errors raised by this crate itself.
/// Failures of external collaborators (storage, directory lookups) travel
/// through `Storage` untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    // ===== Validation Errors =====
    /// Review year below the minimum
    #[error("Invalid year {year}: year must be an integer >= {min}", min = crate::rules::validation::MIN_REVIEW_YEAR)]
    InvalidYear { year: i64 },

    /// Summary empty or whitespace-only
    #[error("Invalid summary: {reason}")]
    InvalidSummary { reason: String },

    /// employee_id does not reference an existing Employee
    #[error("Invalid employee_id {employee_id}: must reference an existing Employee")]
    UnknownEmployee { employee_id: i64 },

    // ===== Lookup Errors =====
    /// Review id is not held by the identity cache
    #[error("Review {review_id} is not loaded in this repository")]
    ReviewNotCached { review_id: i64 },

    // ===== Collaborator Errors =====
    /// Storage or directory failure, propagated unchanged
    #[error(transparent)]
    Storage(#[from] ExError),
}

impl RosterError {
    /// True for the field validation variants
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidYear { .. }
                | RosterError::InvalidSummary { .. }
                | RosterError::UnknownEmployee { .. }
        )
    }
}

/// Conversion from RosterError to ExError
///
/// Validation variants collapse onto `ExErrorKind::Validation`; storage
/// errors come back out exactly as they went in.
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        let message = err.to_string();
        match err {
            RosterError::InvalidYear { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("set_year")
                .with_message(message),

            RosterError::InvalidSummary { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("set_summary")
                .with_message(message),

            RosterError::UnknownEmployee { employee_id } => {
                ExError::new(ExErrorKind::Validation)
                    .with_op("set_employee_id")
                    .with_entity_id(employee_id.to_string())
                    .with_message(message)
            }

            RosterError::ReviewNotCached { review_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(review_id.to_string())
                .with_message(message),

            RosterError::Storage(inner) => inner,
        }
    }
}

/// Conversion from serde_json::Error to ExError
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::Validation,
            ExErrorKind::InvalidInput,
            ExErrorKind::NotFound,
            ExErrorKind::Io,
            ExErrorKind::Config,
            ExErrorKind::Serialization,
            ExErrorKind::Persistence,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("find_by_id")
            .with_entity_id("42")
            .with_message("Review not found");
        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'find_by_id': Review not found (entity_id: 42)"
        );
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk full");
        let outer = ExError::new(ExErrorKind::Persistence).with_source(inner.clone());
        assert_eq!(outer.source_error(), Some(&inner));
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn test_storage_variant_round_trips_unchanged() {
        let original = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("no such table: reviews");
        let wrapped = RosterError::from(original.clone());
        assert!(!wrapped.is_validation());
        let back: ExError = wrapped.into();
        assert_eq!(back, original);
    }
}
