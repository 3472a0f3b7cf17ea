//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state access failed (lock poisoned).
    #[error("Filesystem store lock poisoned")]
    StoreLockError,

    /// A registered file or manifest could not be materialized.
    #[error("Project synthesis failed: {reason}")]
    SynthesisFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::SynthesisFailed { .. } => vec![
                "Run with -vv to see which file failed".into(),
                "Files written before the failure were removed".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SynthesisFailed { .. } => ErrorCategory::Internal,
        }
    }
}
