//! remixgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the remixgen
//! project configuration generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          remixgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │        (ProjectConfigurator)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (ProjectHost, Environment, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   remixgen-adapters (Infrastructure)    │
//! │ (ManifestProject, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectOptions, renderer, providers)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use remixgen_core::{
//!     application::ProjectConfigurator,
//!     domain::{DeploymentProvider, ProjectOptions},
//! };
//!
//! let options = ProjectOptions {
//!     deployment_provider: Some(DeploymentProvider::Vercel),
//!     ..ProjectOptions::default()
//! };
//!
//! // Ports are injected by the caller (see remixgen-adapters).
//! let configurator = ProjectConfigurator::new(environment, filesystem);
//! configurator.configure(options, "./my-app".as_ref(), &mut host).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectConfigurator,
        ports::{Environment, Filesystem, ProjectHost},
    };
    pub use crate::domain::{
        CredentialSource, Dependency, DependencyKind, DeploymentProvider, GeneratedFile,
        GitIgnoreSection, LayoutOptions, ProjectOptions, RelativePath, ResolvedOptions,
        StyleAddOn, Task, TaskCategory,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
