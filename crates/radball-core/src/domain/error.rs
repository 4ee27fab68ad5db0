// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// These describe inputs the validator cannot even look at (wrong entity
/// name, malformed payload shape). Rule violations are *not* errors here:
/// they are accumulated in a [`ValidationResult`](crate::domain::ValidationResult)
/// and only become a [`ValidationError`] at the validating boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown rule code: {0}")]
    UnknownRule(String),

    // ========================================================================
    // Payload Errors
    // ========================================================================
    #[error("invalid {entity} payload: {reason}")]
    InvalidPayload { entity: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownEntity(name) => vec![
                format!("'{}' is not a known entity", name),
                "Known entities: address, league, club, gym, season, person, association, league-group, team".into(),
            ],
            Self::UnknownLocale(name) => vec![
                format!("'{}' is not a supported locale", name),
                "Supported locales: en, de".into(),
            ],
            Self::UnknownRule(code) => vec![
                format!("No rule is registered under '{}'", code),
                "Try: radball rules to list every rule code".into(),
            ],
            Self::InvalidPayload { entity, .. } => vec![
                format!("The payload could not be read as a {} input", entity),
                "Field names use camelCase, as in the GraphQL schema".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownEntity(_) | Self::UnknownLocale(_) | Self::InvalidPayload { .. } => {
                ErrorCategory::InvalidInput
            }
            Self::UnknownRule(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    InvalidInput,
    NotFound,
}

/// The single failure raised by the validating form.
///
/// Its text is every error message of the underlying result joined by
/// `"; "`. Individual violations are only observable through the checking
/// form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    error_count: usize,
}

impl ValidationError {
    pub(crate) fn new(message: String, error_count: usize) -> Self {
        Self {
            message,
            error_count,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of error messages folded into [`Self::message`].
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
