//! Unified error handling for Radball Core.
//!
//! Wraps domain errors and the validating form's failure, with a category
//! and user-actionable suggestions for each.

use thiserror::Error;

use crate::domain::{DomainError, ValidationError};

/// Root error type for Radball Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadballError {
    /// The input could not be interpreted (unknown entity, malformed payload).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The input was read and broke one or more rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RadballError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Validation(e) => vec![
                format!("{} rule(s) were violated", e.error_count()),
                "Try: radball check <ENTITY> <FILE> to see every violation by field".into(),
            ],
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Radball".into(),
                "Please report this issue at: https://github.com/taimos/radball-digital-api/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::InvalidInput => ErrorCategory::InvalidInput,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    InvalidInput,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type RadballResult<T> = Result<T, RadballError>;
