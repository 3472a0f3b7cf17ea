//! Infrastructure adapters for remixgen.
//!
//! This crate implements the ports defined in `remixgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod environment;
pub mod filesystem;
pub mod project;

// Re-export commonly used adapters
pub use environment::{ProcessEnvironment, StaticEnvironment};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project::{ManifestProject, PACKAGE_JSON_PATH, ProjectPlan, SynthesisReport};
