//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `remixgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Dependency, GeneratedFile, GitIgnoreSection, StyleAddOn, Task};
use crate::error::CoreResult;

/// Port for the host project model.
///
/// Implemented by:
/// - `remixgen_adapters::project::ManifestProject` (package.json backed)
///
/// Registration is additive and infallible. Deduplication and materialization
/// are the host's concern.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectHost: Send + Sync {
    /// Register a file to be synthesized later.
    fn add_file(&mut self, file: Box<dyn GeneratedFile>);

    /// Register a block of `.gitignore` rules.
    fn add_git_ignore(&mut self, section: GitIgnoreSection);

    /// Register a runtime or dev dependency.
    fn add_dependency(&mut self, dependency: Dependency);

    /// Register a named task.
    fn add_task(&mut self, task: Task);

    /// Enable an add-on.
    fn add_style_addon(&mut self, addon: StyleAddOn);
}

/// Port for process environment lookup.
///
/// Implemented by:
/// - `remixgen_adapters::environment::ProcessEnvironment` (production)
/// - `remixgen_adapters::environment::StaticEnvironment` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    /// Value of `name`, or `None` when unset. An empty value is `Some("")`.
    fn var(&self, name: &str) -> Option<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `remixgen_adapters::filesystem::LocalFilesystem` (production)
/// - `remixgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Mark a file read-only or writable.
    fn set_readonly(&self, path: &Path, readonly: bool) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> CoreResult<()>;
}
