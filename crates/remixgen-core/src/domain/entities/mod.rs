pub mod common;
pub mod registration;

pub use common::RelativePath;
pub use registration::{Dependency, GitIgnoreSection, StyleAddOn, Task};
