//! `package.json` model.

use std::collections::BTreeMap;

use serde::Serialize;

use remixgen_core::domain::{Dependency, Task};

/// Version written for dependencies registered without a constraint.
pub const ANY_VERSION: &str = "*";

/// The subset of `package.json` this tool manages.
///
/// Field order here is the key order in the written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub private: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Build from registrations. A later entry with the same name replaces
    /// an earlier one.
    pub fn new<'a>(
        name: impl Into<String>,
        dependencies: impl IntoIterator<Item = &'a Dependency>,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> Self {
        let mut manifest = Self {
            name: name.into(),
            private: true,
            scripts: BTreeMap::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        };

        for dependency in dependencies {
            let version = dependency
                .version
                .clone()
                .unwrap_or_else(|| ANY_VERSION.to_string());
            let section = if dependency.is_dev() {
                &mut manifest.dev_dependencies
            } else {
                &mut manifest.dependencies
            };
            section.insert(dependency.name.clone(), version);
        }

        for task in tasks {
            manifest
                .scripts
                .insert(task.name.clone(), task.command.clone());
        }

        manifest
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remixgen_core::domain::TaskCategory;

    #[test]
    fn sections_and_versions() {
        let deps = [
            Dependency::runtime("express"),
            Dependency::runtime("@remix-run/react").at("0.13.1"),
            Dependency::dev("pm2"),
        ];
        let tasks = [Task::new("build", TaskCategory::Build, "remix build")];

        let manifest = PackageJson::new("my-app", &deps, &tasks);

        assert_eq!(manifest.dependencies["express"], "*");
        assert_eq!(manifest.dependencies["@remix-run/react"], "0.13.1");
        assert_eq!(manifest.dev_dependencies["pm2"], "*");
        assert_eq!(manifest.scripts["build"], "remix build");
    }

    #[test]
    fn later_registration_overwrites() {
        let deps = [
            Dependency::runtime("react"),
            Dependency::runtime("react").at("^17.0.0"),
        ];
        let manifest = PackageJson::new("x", &deps, &[]);
        assert_eq!(manifest.dependencies.len(), 1);
        assert_eq!(manifest.dependencies["react"], "^17.0.0");
    }

    #[test]
    fn json_key_order_and_casing() {
        let deps = [Dependency::dev("vercel")];
        let text = PackageJson::new("x", &deps, &[]).to_json().unwrap();

        let name = text.find("\"name\"").unwrap();
        let private = text.find("\"private\"").unwrap();
        let dev = text.find("\"devDependencies\"").unwrap();
        assert!(name < private && private < dev);
        assert!(!text.contains("\"scripts\""));
        assert!(text.ends_with("}\n"));
    }
}
