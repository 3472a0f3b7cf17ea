//! `remixgen plan`: show what `new` would produce.

use serde::Serialize;
use tracing::instrument;

use remixgen_adapters::ProjectPlan;
use remixgen_core::domain::ResolvedOptions;

use crate::{
    cli::{OutputFormat, PlanArgs, PlanFormat},
    commands::{configure_project, project_name},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of `plan --format json`.
#[derive(Debug, Serialize)]
pub struct PlanView<'a> {
    pub options: &'a ResolvedOptions,
    #[serde(flatten)]
    pub plan: &'a ProjectPlan,
}

#[instrument(skip_all, fields(directory = %args.directory.display()))]
pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = project_name(&args.directory, args.name.as_deref())?;
    let options = config.project.merge(args.project.to_options());
    let (project, resolved) = configure_project(options, &args.directory, &name)?;
    let plan = project.plan();

    if args.format == PlanFormat::Json || output.format() == OutputFormat::Json {
        return output.json(&PlanView {
            options: &resolved,
            plan: &plan,
        });
    }

    print_plan(&plan, &resolved, &output)
}

/// Human-readable plan, shared with `new --dry-run`.
pub(crate) fn print_plan(
    plan: &ProjectPlan,
    resolved: &ResolvedOptions,
    out: &OutputManager,
) -> CliResult<()> {
    out.header(&format!("Project '{}'", plan.name))?;
    out.print(&format!("  Provider:       {}", resolved.deployment_provider))?;
    out.print(&format!("  Remix version:  {}", resolved.remix_version))?;
    out.print(&format!("  App directory:  {}", resolved.layout.app_directory))?;
    out.print(&format!("  Dev server:     port {}", resolved.layout.dev_server_port))?;
    out.print("")?;

    out.header("Files")?;
    for file in &plan.files {
        let mut flags = Vec::new();
        if file.readonly {
            flags.push("read-only");
        }
        if !file.committed {
            flags.push("not committed");
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!("  ({})", flags.join(", "))
        };
        out.print(&format!("  {}{suffix}", file.path))?;
    }
    out.print("")?;

    out.header("Dependencies")?;
    for dependency in &plan.dependencies {
        out.print(&format!("  {dependency}"))?;
    }
    out.header("Dev dependencies")?;
    for dependency in &plan.dev_dependencies {
        out.print(&format!("  {dependency}"))?;
    }
    out.print("")?;

    out.header("Tasks")?;
    for task in &plan.tasks {
        out.print(&format!("  {task}"))?;
    }

    if !plan.addons.is_empty() {
        out.print("")?;
        out.header("Add-ons")?;
        for addon in &plan.addons {
            out.print(&format!("  {addon}"))?;
        }
    }

    Ok(())
}
