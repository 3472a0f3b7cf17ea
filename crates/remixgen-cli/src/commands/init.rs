//! `remixgen init`: write an options file holding the defaults.

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.global {
        AppConfig::config_path()
    } else {
        LOCAL_CONFIG_FILE.into()
    };

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Options file already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::with_defaults()).map_err(|e| {
        CliError::ConfigError {
            message: format!("Failed to serialise default options: {e}"),
            source: Some(Box::new(e)),
        }
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write '{}'", config_path.display()))?;

    output.success(&format!("Options written to {}", config_path.display()))?;
    Ok(())
}
