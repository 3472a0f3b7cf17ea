//! Implementation of the `remixgen new` command.
//!
//! Translates CLI arguments into project options, runs the configurator and
//! writes the result. No business logic lives here.

use tracing::{info, instrument};

use remixgen_adapters::{LocalFilesystem, PACKAGE_JSON_PATH};
use remixgen_core::application::Filesystem;

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::{configure_project, plan::print_plan, project_name},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `remixgen new` command.
///
/// 1. Derive and validate the package name
/// 2. Refuse to touch an existing project unless `--force`
/// 3. Layer CLI flags over the options file
/// 4. Configure, then print (`--dry-run`) or write
#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = project_name(&args.directory, args.name.as_deref())?;
    let root = args.directory;
    let fs = LocalFilesystem::new();

    if fs.exists(&root.join(PACKAGE_JSON_PATH)) && !args.force {
        return Err(CliError::ProjectExists { path: root });
    }

    let options = config.project.merge(args.project.to_options());
    let (project, resolved) = configure_project(options, &root, &name)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would write '{name}' to {}",
            root.display()
        ))?;
        return print_plan(&project.plan(), &resolved, &output);
    }

    output.header(&format!("Creating '{name}'..."))?;
    info!(project = %name, provider = %resolved.deployment_provider, "Writing project");

    let report = project.synthesize(&fs, &root)?;

    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }
    output.success(&format!(
        "Project '{name}' configured ({} files)",
        report.files.len()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}
