// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for remixgen.
//!
//! This module contains pure logic with no I/O. Environment access, the
//! filesystem, and the host project model are reached through ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment access
//! - **Deterministic**: Renderer output depends only on its inputs
//! - **Immutable values**: Resolved options are never mutated
pub mod credentials;
pub mod entities;
pub mod error;
pub mod files;
pub mod options;
pub mod providers;
pub mod renderer;
pub mod value_objects;

// Re-exports for convenience
pub use credentials::{
    CREDENTIALS_PATH, CredentialSource, CredentialsFile, REGISTRY_TOKEN_VAR,
    framework_dependencies, select_credentials, type_dependencies,
};
pub use entities::{Dependency, GitIgnoreSection, RelativePath, StyleAddOn, Task};
pub use error::{DomainError, ErrorCategory};
pub use files::{FrameworkConfigFile, GeneratedFile, ProcessManagerConfigFile};
pub use options::{LayoutOptions, ProjectOptions, ResolvedOptions};
pub use providers::{ProviderProfile, profile_for};
pub use renderer::{RenderContext, render_framework_config, render_process_manager_config};
pub use value_objects::{DependencyKind, DeploymentProvider, TaskCategory};

/// Heading for the build-output block in `.gitignore`.
pub const BUILD_OUTPUT_HEADING: &str = "# Remix build output";

/// Ignore rules for the two build directories, rooted at the project.
pub fn build_output_ignores(layout: &LayoutOptions) -> GitIgnoreSection {
    GitIgnoreSection::new(
        BUILD_OUTPUT_HEADING,
        vec![
            format!("/{}", layout.browser_build_directory),
            format!("/{}", layout.server_build_directory),
        ],
    )
}
