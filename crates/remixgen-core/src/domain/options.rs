//! Project options and their resolution against documented defaults.
//!
//! [`ProjectOptions`] is what callers supply: every knob is optional.
//! [`ProjectOptions::resolve`] turns it into a [`ResolvedOptions`] where every
//! field is concrete. Resolution is field-by-field: a caller value always wins,
//! including "falsy" values such as `0`, `""` or `false`. Only an absent field
//! falls back to its default. There is no cross-field validation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeploymentProvider;

pub const DEFAULT_REMIX_VERSION: &str = "0.13.1";
pub const DEFAULT_APP_DIRECTORY: &str = "app";
pub const DEFAULT_BROWSER_BUILD_DIRECTORY: &str = "public/build";
pub const DEFAULT_PUBLIC_PATH: &str = "/build/";
pub const DEFAULT_SERVER_BUILD_DIRECTORY: &str = "build";
pub const DEFAULT_DEV_SERVER_PORT: u16 = 8002;

/// Caller-supplied options. Absent fields take their defaults on resolution.
///
/// Keys are snake_case in option files; the camelCase spellings used by
/// JavaScript tooling are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    #[serde(alias = "remixVersion", skip_serializing_if = "Option::is_none")]
    pub remix_version: Option<String>,

    #[serde(alias = "deploymentProvider", skip_serializing_if = "Option::is_none")]
    pub deployment_provider: Option<DeploymentProvider>,

    /// Misspelled key kept for projects generated by older releases.
    /// `deployment_provider` wins when both are set.
    #[serde(alias = "depolymentProvider", skip_serializing_if = "Option::is_none")]
    pub depolyment_provider: Option<DeploymentProvider>,

    #[serde(alias = "appDirectory", skip_serializing_if = "Option::is_none")]
    pub app_directory: Option<String>,

    #[serde(alias = "browserBuildDirectory", skip_serializing_if = "Option::is_none")]
    pub browser_build_directory: Option<String>,

    #[serde(alias = "publicPath", skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(alias = "serverBuildDirectory", skip_serializing_if = "Option::is_none")]
    pub server_build_directory: Option<String>,

    #[serde(alias = "devServerPort", skip_serializing_if = "Option::is_none")]
    pub dev_server_port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<bool>,
}

impl ProjectOptions {
    /// The effective provider selection before defaults are applied.
    pub fn provider(&self) -> Option<DeploymentProvider> {
        self.deployment_provider.or(self.depolyment_provider)
    }

    /// `true` when the provider came from the legacy misspelled key.
    pub fn uses_legacy_provider_key(&self) -> bool {
        self.deployment_provider.is_none() && self.depolyment_provider.is_some()
    }

    /// Overlay `overrides` on top of `self`, field by field.
    ///
    /// Used to layer command-line flags over an options file.
    pub fn merge(self, overrides: ProjectOptions) -> ProjectOptions {
        ProjectOptions {
            remix_version: overrides.remix_version.or(self.remix_version),
            deployment_provider: overrides.deployment_provider.or(self.deployment_provider),
            depolyment_provider: overrides.depolyment_provider.or(self.depolyment_provider),
            app_directory: overrides.app_directory.or(self.app_directory),
            browser_build_directory: overrides
                .browser_build_directory
                .or(self.browser_build_directory),
            public_path: overrides.public_path.or(self.public_path),
            server_build_directory: overrides
                .server_build_directory
                .or(self.server_build_directory),
            dev_server_port: overrides.dev_server_port.or(self.dev_server_port),
            tailwind: overrides.tailwind.or(self.tailwind),
        }
    }

    /// Apply defaults to every absent field.
    pub fn resolve(self) -> ResolvedOptions {
        let deployment_provider = self.provider().unwrap_or_default();

        ResolvedOptions {
            remix_version: self
                .remix_version
                .unwrap_or_else(|| DEFAULT_REMIX_VERSION.to_string()),
            deployment_provider,
            layout: LayoutOptions {
                app_directory: self
                    .app_directory
                    .unwrap_or_else(|| DEFAULT_APP_DIRECTORY.to_string()),
                browser_build_directory: self
                    .browser_build_directory
                    .unwrap_or_else(|| DEFAULT_BROWSER_BUILD_DIRECTORY.to_string()),
                public_path: self
                    .public_path
                    .unwrap_or_else(|| DEFAULT_PUBLIC_PATH.to_string()),
                server_build_directory: self
                    .server_build_directory
                    .unwrap_or_else(|| DEFAULT_SERVER_BUILD_DIRECTORY.to_string()),
                dev_server_port: self.dev_server_port.unwrap_or(DEFAULT_DEV_SERVER_PORT),
            },
            tailwind: self.tailwind.unwrap_or(false),
        }
    }
}

/// Directory layout and dev-server settings written into `remix.config.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub app_directory: String,
    pub browser_build_directory: String,
    pub public_path: String,
    pub server_build_directory: String,
    pub dev_server_port: u16,
}

/// Fully-resolved options. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub remix_version: String,
    pub deployment_provider: DeploymentProvider,
    pub layout: LayoutOptions,
    pub tailwind: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        ProjectOptions::default().resolve()
    }
}

impl From<ResolvedOptions> for ProjectOptions {
    fn from(resolved: ResolvedOptions) -> Self {
        Self {
            remix_version: Some(resolved.remix_version),
            deployment_provider: Some(resolved.deployment_provider),
            depolyment_provider: None,
            app_directory: Some(resolved.layout.app_directory),
            browser_build_directory: Some(resolved.layout.browser_build_directory),
            public_path: Some(resolved.layout.public_path),
            server_build_directory: Some(resolved.layout.server_build_directory),
            dev_server_port: Some(resolved.layout.dev_server_port),
            tailwind: Some(resolved.tailwind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_documented_defaults() {
        let resolved = ProjectOptions::default().resolve();

        assert_eq!(resolved.remix_version, "0.13.1");
        assert_eq!(resolved.deployment_provider, DeploymentProvider::Express);
        assert_eq!(resolved.layout.app_directory, "app");
        assert_eq!(resolved.layout.browser_build_directory, "public/build");
        assert_eq!(resolved.layout.public_path, "/build/");
        assert_eq!(resolved.layout.server_build_directory, "build");
        assert_eq!(resolved.layout.dev_server_port, 8002);
        assert!(!resolved.tailwind);
    }

    #[test]
    fn falsy_values_override_defaults() {
        let resolved = ProjectOptions {
            app_directory: Some(String::new()),
            public_path: Some(String::new()),
            dev_server_port: Some(0),
            tailwind: Some(false),
            ..ProjectOptions::default()
        }
        .resolve();

        assert_eq!(resolved.layout.app_directory, "");
        assert_eq!(resolved.layout.public_path, "");
        assert_eq!(resolved.layout.dev_server_port, 0);
        assert!(!resolved.tailwind);
    }

    #[test]
    fn each_field_overrides_independently() {
        let resolved = ProjectOptions {
            remix_version: Some("0.14.0".into()),
            server_build_directory: Some("dist/server".into()),
            ..ProjectOptions::default()
        }
        .resolve();

        assert_eq!(resolved.remix_version, "0.14.0");
        assert_eq!(resolved.layout.server_build_directory, "dist/server");
        assert_eq!(resolved.layout.browser_build_directory, "public/build");
    }

    #[test]
    fn legacy_provider_key_is_honoured() {
        let options = ProjectOptions {
            depolyment_provider: Some(DeploymentProvider::Vercel),
            ..ProjectOptions::default()
        };

        assert!(options.uses_legacy_provider_key());
        assert_eq!(
            options.resolve().deployment_provider,
            DeploymentProvider::Vercel
        );
    }

    #[test]
    fn correct_provider_key_wins_over_legacy() {
        let options = ProjectOptions {
            deployment_provider: Some(DeploymentProvider::Express),
            depolyment_provider: Some(DeploymentProvider::Vercel),
            ..ProjectOptions::default()
        };

        assert!(!options.uses_legacy_provider_key());
        assert_eq!(
            options.resolve().deployment_provider,
            DeploymentProvider::Express
        );
    }

    #[test]
    fn merge_prefers_overrides_field_by_field() {
        let file = ProjectOptions {
            dev_server_port: Some(3000),
            app_directory: Some("src".into()),
            ..ProjectOptions::default()
        };
        let flags = ProjectOptions {
            dev_server_port: Some(4000),
            ..ProjectOptions::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.dev_server_port, Some(4000));
        assert_eq!(merged.app_directory.as_deref(), Some("src"));
    }

    #[test]
    fn camel_case_aliases_deserialize() {
        let options: ProjectOptions = serde_json::from_str(
            r#"{"devServerPort": 0, "depolymentProvider": "vercel", "publicPath": ""}"#,
        )
        .unwrap();

        assert_eq!(options.dev_server_port, Some(0));
        assert_eq!(options.depolyment_provider, Some(DeploymentProvider::Vercel));
        assert_eq!(options.public_path.as_deref(), Some(""));
    }

    #[test]
    fn resolved_converts_back_to_fully_populated_options() {
        let options = ProjectOptions::from(ResolvedOptions::default());
        assert_eq!(options.dev_server_port, Some(8002));
        assert_eq!(options.depolyment_provider, None);
        assert_eq!(options.resolve(), ResolvedOptions::default());
    }
}
