//! Credentials bootstrap for the private Remix package registry.
//!
//! Remix packages are served from a private registry. Before the framework
//! dependencies can resolve, the project needs either a registry token in the
//! environment (written into a non-committed `.npmrc`) or an `.npmrc` that is
//! already on disk. [`select_credentials`] picks the source from plain inputs
//! so the branch can be tested without touching the real environment.

use std::path::PathBuf;

use crate::domain::{
    entities::{Dependency, RelativePath},
    error::DomainError,
    files::GeneratedFile,
};

/// Environment variable holding the registry access token.
pub const REGISTRY_TOKEN_VAR: &str = "REMIX_TOKEN";

/// Credentials file, relative to the project root.
pub const CREDENTIALS_PATH: &str = ".npmrc";

pub const REGISTRY_HOST: &str = "npm.remix.run";
pub const REGISTRY_SCOPE: &str = "@remix-run";

/// Version range for `react-router` and `react-router-dom`.
pub const ROUTER_VERSION: &str = "^6.0.0-beta.0";

/// Where registry access comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Token read from [`REGISTRY_TOKEN_VAR`]; a fresh `.npmrc` is written.
    EnvToken(String),
    /// An `.npmrc` already exists and is left untouched.
    ExistingFile,
}

impl CredentialSource {
    /// The file to register for this source, if any.
    pub fn credentials_file(&self) -> Option<CredentialsFile> {
        match self {
            Self::EnvToken(token) => Some(CredentialsFile::new(token)),
            Self::ExistingFile => None,
        }
    }
}

/// Choose a credential source. A set token wins, even an empty one.
pub fn select_credentials(
    token: Option<String>,
    credentials_file_exists: bool,
) -> Result<CredentialSource, DomainError> {
    match (token, credentials_file_exists) {
        (Some(token), _) => Ok(CredentialSource::EnvToken(token)),
        (None, true) => Ok(CredentialSource::ExistingFile),
        (None, false) => Err(DomainError::MissingCredentials {
            variable: REGISTRY_TOKEN_VAR,
            path: PathBuf::from(CREDENTIALS_PATH),
        }),
    }
}

/// The non-committed, writable `.npmrc`.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    path: RelativePath,
    content: String,
}

impl CredentialsFile {
    pub fn new(token: &str) -> Self {
        let content = format!(
            "//{REGISTRY_HOST}/:_authToken={token}\n{REGISTRY_SCOPE}:registry=https://{REGISTRY_HOST}\n"
        );
        Self {
            path: RelativePath::new(CREDENTIALS_PATH),
            content,
        }
    }
}

// The token must not end up in logs.
impl std::fmt::Debug for CredentialsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsFile")
            .field("path", &self.path)
            .field("content", &"<redacted>")
            .finish()
    }
}

impl GeneratedFile for CredentialsFile {
    fn path(&self) -> &RelativePath {
        &self.path
    }

    fn synthesize(&self) -> Option<String> {
        Some(self.content.clone())
    }

    fn readonly(&self) -> bool {
        false
    }

    fn committed(&self) -> bool {
        false
    }
}

/// Runtime dependencies every Remix app needs, pinned to `remix_version`.
pub fn framework_dependencies(remix_version: &str) -> Vec<Dependency> {
    vec![
        Dependency::runtime("@remix-run/cli").at(remix_version),
        Dependency::runtime("@remix-run/data").at(remix_version),
        Dependency::runtime("@remix-run/react").at(remix_version),
        Dependency::runtime("react"),
        Dependency::runtime("react-dom"),
        Dependency::runtime("react-router").at(ROUTER_VERSION),
        Dependency::runtime("react-router-dom").at(ROUTER_VERSION),
    ]
}

/// Type declarations registered regardless of credential source.
pub fn type_dependencies() -> Vec<Dependency> {
    vec![
        Dependency::dev("@types/react"),
        Dependency::dev("@types/react-dom"),
    ]
}
