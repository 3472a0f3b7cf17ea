//! Command handlers. One module per subcommand.

use std::path::{Path, PathBuf};

use tracing::debug;

use remixgen_adapters::{LocalFilesystem, ManifestProject, ProcessEnvironment};
use remixgen_core::{
    application::ProjectConfigurator,
    domain::{ProjectOptions, ResolvedOptions},
};

use crate::error::{CliError, CliResult, IntoCli};

pub mod completions;
pub mod init;
pub mod new;
pub mod plan;

/// Run the configurator against the real environment and filesystem.
///
/// Nothing is written; the returned project holds every registration.
pub(crate) fn configure_project(
    options: ProjectOptions,
    root: &Path,
    name: &str,
) -> CliResult<(ManifestProject, ResolvedOptions)> {
    let configurator = ProjectConfigurator::new(
        Box::new(ProcessEnvironment::new()),
        Box::new(LocalFilesystem::new()),
    );

    let mut project = ManifestProject::new(name);
    let resolved = configurator.configure(options, root, &mut project)?;
    project.set_app_directory(resolved.layout.app_directory.clone());

    debug!(
        files = project.plan().files.len(),
        tasks = project.tasks().len(),
        "Project registrations collected"
    );
    Ok((project, resolved))
}

/// Package name: `--name` if given, else the directory's final component.
pub(crate) fn project_name(directory: &Path, explicit: Option<&str>) -> CliResult<String> {
    let name = match explicit {
        Some(name) => name.to_string(),
        None => {
            let absolute: PathBuf = std::env::current_dir()
                .with_cli_context(|| "reading the current directory")?
                .join(directory);
            absolute
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| CliError::InvalidProjectName {
                    name: directory.display().to_string(),
                    reason: "cannot derive a name from this directory; pass --name".into(),
                })?
                .to_string()
        }
    };

    validate_project_name(&name)?;
    Ok(name)
}

const MAX_NAME_LENGTH: usize = 214;

/// npm package-name rules, including an optional `@scope/` prefix.
pub(crate) fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid("name cannot be longer than 214 characters"));
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(invalid("name cannot start with '.' or '_'"));
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(invalid("name must be lowercase"));
    }

    let parts = match name.strip_prefix('@') {
        Some(scoped) => {
            let (scope, package) = scoped
                .split_once('/')
                .ok_or_else(|| invalid("scoped names look like @scope/name"))?;
            if scope.is_empty() || package.is_empty() {
                return Err(invalid("scoped names look like @scope/name"));
            }
            if package.starts_with('.') || package.starts_with('_') {
                return Err(invalid("name cannot start with '.' or '_'"));
            }
            vec![scope, package]
        }
        None => vec![name],
    };

    if parts.into_iter().all(is_url_safe) {
        Ok(())
    } else {
        Err(invalid("name must be URL-safe"))
    }
}

fn is_url_safe(part: &str) -> bool {
    part.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-._~".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["my-app", "remix_site", "app123", "a.b", "@acme/storefront"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn invalid_names_fail() {
        for name in [
            "",
            ".hidden",
            "_private",
            "MyApp",
            "my app",
            "a/b",
            "@acme",
            "@/x",
            "@acme/_x",
        ] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(CliError::InvalidProjectName { .. })
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn overlong_name_fails() {
        assert!(validate_project_name(&"a".repeat(215)).is_err());
        assert!(validate_project_name(&"a".repeat(214)).is_ok());
    }

    #[test]
    fn name_defaults_to_directory() {
        assert_eq!(project_name(Path::new("work/my-app"), None).unwrap(), "my-app");
    }

    #[test]
    fn explicit_name_wins() {
        assert_eq!(
            project_name(Path::new("Work Dir"), Some("site")).unwrap(),
            "site"
        );
    }
}
