//! Per-provider registration data.
//!
//! Each [`DeploymentProvider`] maps to one [`ProviderProfile`]: the extra
//! dependencies, the tasks, and whether the process-manager config is needed.
//! The configurator applies exactly one profile. Adding a provider means adding
//! a variant and an arm in [`profile_for`]; nothing else changes.

use crate::domain::{
    entities::{Dependency, Task},
    value_objects::{DeploymentProvider, TaskCategory},
};

/// Version of `@vercel/node` the serverless adapter is built against.
pub const VERCEL_NODE_VERSION: &str = "^1.9.0";

/// Everything a provider contributes to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub provider: DeploymentProvider,
    pub runtime_dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
    pub tasks: Vec<Task>,
    /// Register `pm2.config.js`.
    pub process_manager: bool,
}

impl ProviderProfile {
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Build the profile for `provider`, pinning adapters to `remix_version`.
pub fn profile_for(provider: DeploymentProvider, remix_version: &str) -> ProviderProfile {
    match provider {
        DeploymentProvider::Express => ProviderProfile {
            provider,
            runtime_dependencies: vec![
                Dependency::runtime("@remix-run/express").at(remix_version),
                Dependency::runtime("express"),
                Dependency::runtime("morgan"),
            ],
            dev_dependencies: vec![Dependency::dev("pm2")],
            tasks: vec![
                Task::new("build", TaskCategory::Build, "remix build"),
                Task::new("dev", TaskCategory::Build, "pm2-dev pm2.config.js"),
                Task::new("start", TaskCategory::Release, "node server.js"),
            ],
            process_manager: true,
        },
        DeploymentProvider::Vercel => ProviderProfile {
            provider,
            runtime_dependencies: vec![
                Dependency::runtime("@remix-run/vercel").at(remix_version),
                Dependency::runtime("@vercel/node").at(VERCEL_NODE_VERSION),
            ],
            dev_dependencies: vec![Dependency::dev("vercel"), Dependency::dev("concurrently")],
            tasks: vec![
                Task::new("predeploy", TaskCategory::Build, "remix build"),
                Task::new("deploy", TaskCategory::Release, "vercel"),
                Task::new(
                    "start",
                    TaskCategory::Release,
                    r#"concurrently "remix run" "vercel dev""#,
                ),
            ],
            process_manager: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn express_tasks() {
        let profile = profile_for(DeploymentProvider::Express, "0.13.1");

        assert_eq!(profile.task_names(), ["build", "dev", "start"]);
        assert_eq!(
            profile.tasks[1],
            Task::new("dev", TaskCategory::Build, "pm2-dev pm2.config.js")
        );
        assert_eq!(profile.tasks[2].category, TaskCategory::Release);
        assert!(profile.process_manager);
    }

    #[test]
    fn vercel_tasks() {
        let profile = profile_for(DeploymentProvider::Vercel, "0.13.1");

        assert_eq!(profile.task_names(), ["predeploy", "deploy", "start"]);
        assert_eq!(
            profile.tasks[2].command,
            r#"concurrently "remix run" "vercel dev""#
        );
        assert!(!profile.process_manager);
    }

    #[test]
    fn adapters_follow_remix_version() {
        let express = profile_for(DeploymentProvider::Express, "0.14.0");
        let vercel = profile_for(DeploymentProvider::Vercel, "0.14.0");

        assert_eq!(
            express.runtime_dependencies[0].to_string(),
            "@remix-run/express@0.14.0"
        );
        assert_eq!(
            vercel.runtime_dependencies[0].to_string(),
            "@remix-run/vercel@0.14.0"
        );
        assert_eq!(
            vercel.runtime_dependencies[1].to_string(),
            "@vercel/node@^1.9.0"
        );
    }

    #[test]
    fn dev_dependencies_are_marked_dev() {
        for provider in DeploymentProvider::ALL {
            let profile = profile_for(provider, "0.13.1");
            assert!(profile.dev_dependencies.iter().all(Dependency::is_dev));
            assert!(profile.runtime_dependencies.iter().all(|d| !d.is_dev()));
        }
    }
}
