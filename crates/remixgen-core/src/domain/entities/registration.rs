//! Records handed to the host project: dependencies, tasks, ignore rules and
//! add-ons.
//!
//! These carry no behaviour beyond construction and display. The host decides
//! how to deduplicate and materialize them.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::{DependencyKind, TaskCategory};

/// A package name with an optional version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn runtime(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            kind: DependencyKind::Runtime,
        }
    }

    pub fn dev(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            kind: DependencyKind::Dev,
        }
    }

    pub fn at(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn is_dev(&self) -> bool {
        self.kind == DependencyKind::Dev
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// A named single-command action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Task {
    pub name: String,
    pub category: TaskCategory,
    pub command: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        category: TaskCategory,
        command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            command: command.into(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.category, self.command)
    }
}

/// A block of `.gitignore` rules under a comment heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitIgnoreSection {
    pub heading: String,
    pub patterns: Vec<String>,
}

impl GitIgnoreSection {
    pub fn new(heading: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            patterns,
        }
    }

    /// Render as `.gitignore` lines, heading first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.heading.as_str()).chain(self.patterns.iter().map(String::as_str))
    }
}

/// Optional add-ons the host knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleAddOn {
    /// Tailwind CSS through PostCSS.
    Tailwind,
}

impl fmt::Display for StyleAddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tailwind => f.write_str("tailwind"),
        }
    }
}
