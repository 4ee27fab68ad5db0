//! Adapter errors.

use std::path::PathBuf;

use thiserror::Error;

use radball_core::domain::DomainError;
use radball_core::error::{ErrorCategory, RadballError};

/// Failures while reading payloads, exports or catalog files.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AdapterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::Io { .. } | Self::Json { .. } => ErrorCategory::InvalidInput,
            Self::Toml { .. } => ErrorCategory::Configuration,
            Self::Domain(e) => RadballError::from(e.clone()).category(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
                "Pass '-' to read the payload from stdin".into(),
            ],
            Self::Json { .. } => vec![
                "The payload must be a JSON object, or an array of objects".into(),
            ],
            Self::Toml { .. } => vec![
                "Catalog files look like:".into(),
                "  locale = \"de\"".into(),
                "  [messages]".into(),
                "  \"team.name.empty\" = \"Bitte einen Teamnamen angeben\"".into(),
            ],
            Self::Domain(e) => e.suggestions(),
        }
    }
}

impl From<AdapterError> for RadballError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::Domain(e) => RadballError::Domain(e),
            AdapterError::Json { origin, source } => RadballError::Domain(DomainError::InvalidPayload {
                entity: origin,
                reason: source.to_string(),
            }),
            other @ (AdapterError::Io { .. } | AdapterError::Toml { .. }) => {
                RadballError::Configuration {
                    message: other.to_string(),
                }
            }
        }
    }
}
