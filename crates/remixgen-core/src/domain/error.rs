// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Credentials
    // ========================================================================
    /// Neither the registry token nor an existing credentials file is present.
    #[error(
        "Missing registry credentials: set {variable} or provide {} in the project root",
        .path.display()
    )]
    MissingCredentials {
        variable: &'static str,
        path: PathBuf,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown deployment provider '{name}' (expected one of: {expected})")]
    UnknownProvider { name: String, expected: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingCredentials { variable, path } => vec![
                format!("Export your Remix registry token: export {variable}=<token>"),
                format!(
                    "Or place an existing {} in the project directory",
                    path.display()
                ),
                "A .env file in the working directory is also read".into(),
            ],
            Self::UnknownProvider { expected, .. } => vec![
                format!("Supported providers: {expected}"),
                "Example: remixgen new my-app --provider vercel".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredentials { .. } => ErrorCategory::Credentials,
            Self::UnknownProvider { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Credentials,
}
