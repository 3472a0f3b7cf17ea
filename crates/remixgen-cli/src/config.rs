//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the `ProjectOptions`
//! inside it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged at the call-site, not here)
//! 2. Environment variables: `REMIXGEN_PROJECT__DEV_SERVER_PORT=3000`
//! 3. Options file: `--config FILE`, or `./remixgen.toml` over the user one
//! 4. Built-in defaults (applied when options are resolved)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use remixgen_core::domain::{ProjectOptions, ResolvedOptions};

/// Options file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "remixgen.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REMIXGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project options; absent keys fall back to the built-in defaults.
    pub project: ProjectOptions,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from files and the environment.
    ///
    /// An explicit `config_file` must exist. The default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            config_file.map(PathBuf::as_path),
            Path::new(LOCAL_CONFIG_FILE),
            Self::environment(),
        )
    }

    /// `REMIXGEN_PROJECT__DEV_SERVER_PORT=3000` sets `project.dev_server_port`.
    ///
    /// Values stay strings until deserialization so `1.0` or `007` reach
    /// string options unchanged.
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_from(
        config_file: Option<&Path>,
        local_file: &Path,
        environment: config::Environment,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder
                .add_source(config::File::from(Self::config_path()).required(false))
                .add_source(config::File::from(local_file).required(false)),
        };

        builder
            .add_source(environment)
            .build()
            .context("Failed to read options")?
            .try_deserialize()
            .context("Invalid options")
    }

    /// The file `remixgen init` writes: every option spelled out.
    pub fn with_defaults() -> Self {
        Self {
            project: ResolvedOptions::default().into(),
            output: OutputConfig::default(),
        }
    }

    /// Path to the user-level options file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `remixgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("run", "remix", "remixgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
