//! Domain value objects: DeploymentProvider, TaskCategory, DependencyKind.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Provider-specific registration data lives in `providers.rs`; this file only
//! defines the types, their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DeploymentProvider ───────────────────────────────────────────────────────

/// The platform the generated application is deployed to.
///
/// Exactly one provider is active per project and it never changes after
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentProvider {
    /// Long-running Express server managed by pm2 in development.
    #[default]
    Express,
    /// Vercel serverless functions.
    Vercel,
}

impl DeploymentProvider {
    pub const ALL: [Self; 2] = [Self::Express, Self::Vercel];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Vercel => "vercel",
        }
    }
}

impl fmt::Display for DeploymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Self::Express),
            "vercel" => Ok(Self::Vercel),
            other => Err(DomainError::UnknownProvider {
                name: other.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

// ── TaskCategory ─────────────────────────────────────────────────────────────

/// Category a task is filed under in the host project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Build,
    Release,
}

impl TaskCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DependencyKind ───────────────────────────────────────────────────────────

/// Which dependency manifest section a package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => f.write_str("runtime"),
            Self::Dev => f.write_str("dev"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!(
            DeploymentProvider::from_str("Express").unwrap(),
            DeploymentProvider::Express
        );
        assert_eq!(
            DeploymentProvider::from_str(" VERCEL ").unwrap(),
            DeploymentProvider::Vercel
        );
    }

    #[test]
    fn architect_provider_is_rejected() {
        let err = DeploymentProvider::from_str("architect").unwrap_err();
        match err {
            DomainError::UnknownProvider { name, expected } => {
                assert_eq!(name, "architect");
                assert_eq!(expected, "express, vercel");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn provider_defaults_to_express() {
        assert_eq!(DeploymentProvider::default(), DeploymentProvider::Express);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for provider in DeploymentProvider::ALL {
            assert_eq!(
                DeploymentProvider::from_str(&provider.to_string()).unwrap(),
                provider
            );
        }
    }

    #[test]
    fn category_display() {
        assert_eq!(TaskCategory::Build.to_string(), "build");
        assert_eq!(TaskCategory::Release.to_string(), "release");
    }
}
