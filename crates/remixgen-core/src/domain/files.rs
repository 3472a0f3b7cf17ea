//! Generated file descriptors.
//!
//! A descriptor knows its project-relative path and produces its text on
//! demand. The host calls [`GeneratedFile::synthesize`] when it materializes
//! the project; options are captured by value at registration so later edits
//! elsewhere are never observed.

use std::fmt;

use crate::domain::{
    entities::RelativePath,
    options::LayoutOptions,
    renderer::{
        FRAMEWORK_CONFIG_PATH, PROCESS_MANAGER_CONFIG_PATH, render_framework_config,
        render_process_manager_config,
    },
};

/// A file whose content is produced at synthesis time.
pub trait GeneratedFile: fmt::Debug + Send + Sync {
    /// Path relative to the project root.
    fn path(&self) -> &RelativePath;

    /// File text, or `None` to skip writing.
    fn synthesize(&self) -> Option<String>;

    /// Generated files are read-only unless they say otherwise.
    fn readonly(&self) -> bool {
        true
    }

    /// Whether the file belongs in version control.
    fn committed(&self) -> bool {
        true
    }
}

/// `remix.config.js`.
#[derive(Debug, Clone)]
pub struct FrameworkConfigFile {
    path: RelativePath,
    layout: LayoutOptions,
}

impl FrameworkConfigFile {
    pub fn new(layout: LayoutOptions) -> Self {
        Self {
            path: RelativePath::new(FRAMEWORK_CONFIG_PATH),
            layout,
        }
    }

    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }
}

impl GeneratedFile for FrameworkConfigFile {
    fn path(&self) -> &RelativePath {
        &self.path
    }

    fn synthesize(&self) -> Option<String> {
        Some(render_framework_config(&self.layout))
    }
}

/// `pm2.config.js`, registered for the Express provider only.
#[derive(Debug, Clone)]
pub struct ProcessManagerConfigFile {
    path: RelativePath,
}

impl ProcessManagerConfigFile {
    pub fn new() -> Self {
        Self {
            path: RelativePath::new(PROCESS_MANAGER_CONFIG_PATH),
        }
    }
}

impl Default for ProcessManagerConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for ProcessManagerConfigFile {
    fn path(&self) -> &RelativePath {
        &self.path
    }

    fn synthesize(&self) -> Option<String> {
        Some(render_process_manager_config())
    }
}
