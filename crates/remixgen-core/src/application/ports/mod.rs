//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `remixgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProjectHost`: The project model that receives registrations
//!   - `Environment`: Process environment lookup
//!   - `Filesystem`: File operations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Environment, Filesystem, ProjectHost};

#[cfg(test)]
pub use output::{MockEnvironment, MockFilesystem, MockProjectHost};
