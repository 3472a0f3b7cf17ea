//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use remixgen_core::domain::{DeploymentProvider, DomainError, ProjectOptions};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "remixgen",
    bin_name = "remixgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Remix project configuration generator",
    long_about = "remixgen writes remix.config.js, package.json scripts and \
                  dependencies, and deployment tooling for a Remix app.",
    after_help = "EXAMPLES:\n\
        \x20 REMIX_TOKEN=... remixgen new my-app\n\
        \x20 remixgen new my-app --provider vercel --tailwind\n\
        \x20 remixgen plan my-app --format json\n\
        \x20 remixgen completions bash > /usr/share/bash-completion/completions/remixgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a Remix project in a directory.
    #[command(
        visible_alias = "n",
        about = "Generate project files",
        after_help = "EXAMPLES:\n\
            \x20 remixgen new my-app\n\
            \x20 remixgen new my-app --provider vercel --port 3000\n\
            \x20 remixgen new . --name my-app --force"
    )]
    New(NewArgs),

    /// Show what would be registered, without writing anything.
    #[command(
        about = "Preview files, dependencies and tasks",
        after_help = "EXAMPLES:\n\
            \x20 remixgen plan\n\
            \x20 remixgen plan my-app --provider vercel --format json"
    )]
    Plan(PlanArgs),

    /// Write an options file with the defaults.
    #[command(
        about = "Create an options file",
        after_help = "EXAMPLES:\n\
            \x20 remixgen init           # ./remixgen.toml\n\
            \x20 remixgen init --global  # user config directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 remixgen completions bash > ~/.local/share/bash-completion/completions/remixgen\n\
            \x20 remixgen completions zsh  > ~/.zfunc/_remixgen\n\
            \x20 remixgen completions fish > ~/.config/fish/completions/remixgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── project options ───────────────────────────────────────────────────────────

/// Flags that override the options file, shared by `new` and `plan`.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Deployment provider.
    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        value_parser = parse_provider,
        help = "Deployment provider: express or vercel"
    )]
    pub provider: Option<DeploymentProvider>,

    #[arg(long = "remix-version", value_name = "VERSION", help = "Remix version to pin")]
    pub remix_version: Option<String>,

    #[arg(long = "app-dir", value_name = "DIR", help = "App source directory")]
    pub app_directory: Option<String>,

    #[arg(long = "browser-build-dir", value_name = "DIR", help = "Browser build directory")]
    pub browser_build_directory: Option<String>,

    #[arg(long = "public-path", value_name = "PATH", help = "URL prefix of the browser build")]
    pub public_path: Option<String>,

    #[arg(long = "server-build-dir", value_name = "DIR", help = "Server build directory")]
    pub server_build_directory: Option<String>,

    #[arg(long = "port", value_name = "PORT", help = "Dev server port")]
    pub dev_server_port: Option<u16>,

    #[arg(long = "tailwind", conflicts_with = "no_tailwind", help = "Add Tailwind CSS")]
    pub tailwind: bool,

    #[arg(long = "no-tailwind", help = "Do not add Tailwind CSS")]
    pub no_tailwind: bool,
}

impl ProjectArgs {
    /// Only flags that were actually given become `Some`.
    pub fn to_options(&self) -> ProjectOptions {
        let tailwind = match (self.tailwind, self.no_tailwind) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        ProjectOptions {
            remix_version: self.remix_version.clone(),
            deployment_provider: self.provider,
            depolyment_provider: None,
            app_directory: self.app_directory.clone(),
            browser_build_directory: self.browser_build_directory.clone(),
            public_path: self.public_path.clone(),
            server_build_directory: self.server_build_directory.clone(),
            dev_server_port: self.dev_server_port,
            tailwind,
        }
    }
}

fn parse_provider(value: &str) -> Result<DeploymentProvider, DomainError> {
    value.parse()
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `remixgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory. Created if missing.
    #[arg(value_name = "DIR", help = "Project directory")]
    pub directory: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Package name. Defaults to the directory name.
    #[arg(long = "name", value_name = "NAME", help = "package.json name")]
    pub name: Option<String>,

    /// Overwrite an existing project (destructive).
    #[arg(long = "force", help = "Overwrite an existing package.json")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `remixgen plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Project directory, used for the credentials check and default name.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub directory: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long = "name", value_name = "NAME", help = "package.json name")]
    pub name: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable sections.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `remixgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user config directory instead of `./remixgen.toml`.
    #[arg(long = "global", help = "Create options file in the user config directory")]
    pub global: bool,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing options file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `remixgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
