//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "configure a Remix project".

pub mod configurator;

pub use configurator::ProjectConfigurator;
