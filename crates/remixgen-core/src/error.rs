//! Unified error handling for remixgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for remixgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Errors from the domain layer (rule violations, missing credentials).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (ports and synthesis failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Credentials => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this is the fatal credentials bootstrap failure.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::Domain(DomainError::MissingCredentials { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_credentials_is_configuration_category() {
        let err: CoreError = DomainError::MissingCredentials {
            variable: "REMIX_TOKEN",
            path: PathBuf::from(".npmrc"),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.is_missing_credentials());
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: CoreError = ApplicationError::FilesystemError {
            path: PathBuf::from("package.json"),
            reason: "denied".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_missing_credentials());
    }
}
