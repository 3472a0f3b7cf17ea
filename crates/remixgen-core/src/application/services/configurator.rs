//! Project Configurator - main application orchestrator.
//!
//! This service drives one configuration run against a host project:
//! 1. Resolve options
//! 2. Register the framework config and its ignore rules
//! 3. Bootstrap registry credentials
//! 4. Register type declarations
//! 5. Apply the deployment provider profile
//! 6. Enable add-ons
//!
//! It performs no I/O of its own; the environment and the credentials file
//! check go through ports.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Environment, Filesystem, ProjectHost},
    domain::{
        CREDENTIALS_PATH, CredentialSource, FrameworkConfigFile, GeneratedFile,
        ProcessManagerConfigFile, ProjectOptions, ProviderProfile, REGISTRY_TOKEN_VAR,
        ResolvedOptions, StyleAddOn, build_output_ignores, framework_dependencies, profile_for,
        select_credentials, type_dependencies,
    },
    error::CoreResult,
};

/// Configures a Remix project on a [`ProjectHost`].
pub struct ProjectConfigurator {
    environment: Box<dyn Environment>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectConfigurator {
    /// Create a configurator with the given adapters.
    pub fn new(environment: Box<dyn Environment>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            environment,
            filesystem,
        }
    }

    /// Register everything a Remix project needs on `host`.
    ///
    /// `root` is the project directory; only `<root>/.npmrc` is inspected.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` when neither the registry token nor an
    /// existing credentials file is available. Registrations made before the
    /// credentials step stay on the host.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn configure(
        &self,
        options: ProjectOptions,
        root: &Path,
        host: &mut dyn ProjectHost,
    ) -> CoreResult<ResolvedOptions> {
        if options.uses_legacy_provider_key() {
            warn!(
                "`depolymentProvider` is deprecated and will be removed; use `deploymentProvider`"
            );
        }

        // 1. Resolve
        let resolved = options.resolve();
        info!(
            provider = %resolved.deployment_provider,
            remix_version = %resolved.remix_version,
            tailwind = resolved.tailwind,
            "Configuring Remix project"
        );

        // 2. Framework config and build output ignores
        let framework_config = FrameworkConfigFile::new(resolved.layout.clone());
        debug!(path = %framework_config.path(), "Registering file");
        host.add_file(Box::new(framework_config));

        let ignores = build_output_ignores(&resolved.layout);
        debug!(patterns = ?ignores.patterns, "Registering git ignore section");
        host.add_git_ignore(ignores);

        // 3. Credentials
        self.bootstrap_credentials(&resolved.remix_version, root, host)?;

        // 4. Types
        for dependency in type_dependencies() {
            debug!(%dependency, "Registering dev dependency");
            host.add_dependency(dependency);
        }

        // 5. Provider
        self.apply_profile(
            profile_for(resolved.deployment_provider, &resolved.remix_version),
            host,
        );

        // 6. Add-ons
        if resolved.tailwind {
            debug!(addon = %StyleAddOn::Tailwind, "Enabling add-on");
            host.add_style_addon(StyleAddOn::Tailwind);
        }

        info!("Project configured");
        Ok(resolved)
    }

    /// Where registry access will come from for a project at `root`.
    pub fn credential_source(&self, root: &Path) -> CoreResult<CredentialSource> {
        let token = self.environment.var(REGISTRY_TOKEN_VAR);
        let file_exists = self.filesystem.exists(&root.join(CREDENTIALS_PATH));
        Ok(select_credentials(token, file_exists)?)
    }

    fn bootstrap_credentials(
        &self,
        remix_version: &str,
        root: &Path,
        host: &mut dyn ProjectHost,
    ) -> CoreResult<()> {
        let source = match self.credential_source(root) {
            Ok(source) => source,
            Err(e) => {
                warn!(
                    variable = REGISTRY_TOKEN_VAR,
                    path = CREDENTIALS_PATH,
                    "No registry credentials found"
                );
                return Err(e);
            }
        };

        match source.credentials_file() {
            Some(file) => {
                info!(
                    variable = REGISTRY_TOKEN_VAR,
                    "Writing registry credentials from environment"
                );
                host.add_file(Box::new(file));
            }
            None => info!(path = CREDENTIALS_PATH, "Using existing registry credentials"),
        }

        for dependency in framework_dependencies(remix_version) {
            debug!(%dependency, "Registering dependency");
            host.add_dependency(dependency);
        }

        Ok(())
    }

    fn apply_profile(&self, profile: ProviderProfile, host: &mut dyn ProjectHost) {
        info!(provider = %profile.provider, "Applying provider profile");

        for dependency in profile
            .runtime_dependencies
            .into_iter()
            .chain(profile.dev_dependencies)
        {
            debug!(%dependency, kind = %dependency.kind, "Registering dependency");
            host.add_dependency(dependency);
        }

        if profile.process_manager {
            debug!("Registering process manager config");
            host.add_file(Box::new(ProcessManagerConfigFile::new()));
        }

        for task in profile.tasks {
            debug!(%task, "Registering task");
            host.add_task(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockEnvironment, MockFilesystem, MockProjectHost};
    use crate::domain::{DeploymentProvider, DomainError, StyleAddOn};
    use crate::error::CoreError;
    use std::sync::{Arc, Mutex};

    fn environment(token: Option<&str>) -> Box<MockEnvironment> {
        let mut env = MockEnvironment::new();
        env.expect_var()
            .withf(|name| name == "REMIX_TOKEN")
            .return_const(token.map(String::from));
        Box::new(env)
    }

    fn filesystem(npmrc_exists: bool) -> Box<MockFilesystem> {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path.ends_with(".npmrc"))
            .return_const(npmrc_exists);
        Box::new(fs)
    }

    type Sink = Arc<Mutex<Vec<String>>>;

    /// Host recording file paths, dependency strings and task names.
    fn recording_host() -> (MockProjectHost, Sink, Sink, Sink) {
        let files: Sink = Arc::default();
        let deps: Sink = Arc::default();
        let tasks: Sink = Arc::default();

        let mut host = MockProjectHost::new();
        let sink = Arc::clone(&files);
        host.expect_add_file()
            .returning(move |f| sink.lock().unwrap().push(f.path().to_string()));
        let sink = Arc::clone(&deps);
        host.expect_add_dependency()
            .returning(move |d| sink.lock().unwrap().push(d.to_string()));
        let sink = Arc::clone(&tasks);
        host.expect_add_task()
            .returning(move |t| sink.lock().unwrap().push(t.name));
        host.expect_add_git_ignore().times(1).return_const(());

        (host, files, deps, tasks)
    }

    #[test]
    fn defaults_with_token_register_express_project() {
        let (mut host, files, deps, tasks) = recording_host();
        host.expect_add_style_addon().never();
        let configurator = ProjectConfigurator::new(environment(Some("t0k")), filesystem(false));

        let resolved = configurator
            .configure(ProjectOptions::default(), Path::new("app"), &mut host)
            .unwrap();

        assert_eq!(resolved, ResolvedOptions::default());
        assert_eq!(
            *files.lock().unwrap(),
            ["remix.config.js", ".npmrc", "pm2.config.js"]
        );
        assert_eq!(*tasks.lock().unwrap(), ["build", "dev", "start"]);

        let deps = deps.lock().unwrap();
        assert_eq!(deps.len(), 13);
        assert!(deps.contains(&"@remix-run/express@0.13.1".to_string()));
        assert!(deps.contains(&"pm2".to_string()));
        assert!(deps.contains(&"@types/react-dom".to_string()));
    }

    #[test]
    fn vercel_with_existing_credentials_writes_no_npmrc() {
        let (mut host, files, deps, tasks) = recording_host();
        host.expect_add_style_addon().never();
        let configurator = ProjectConfigurator::new(environment(None), filesystem(true));

        let options = ProjectOptions {
            deployment_provider: Some(DeploymentProvider::Vercel),
            ..Default::default()
        };
        configurator
            .configure(options, Path::new("site"), &mut host)
            .unwrap();

        assert_eq!(*files.lock().unwrap(), ["remix.config.js"]);
        assert_eq!(*tasks.lock().unwrap(), ["predeploy", "deploy", "start"]);

        let deps = deps.lock().unwrap();
        assert!(deps.contains(&"@remix-run/react@0.13.1".to_string()));
        assert!(deps.contains(&"@vercel/node@^1.9.0".to_string()));
        assert!(!deps.iter().any(|d| d.starts_with("pm2")));
    }

    #[test]
    fn missing_credentials_stops_after_framework_config() {
        let mut host = MockProjectHost::new();
        host.expect_add_file().times(1).return_const(());
        host.expect_add_git_ignore().times(1).return_const(());
        host.expect_add_dependency().never();
        host.expect_add_task().never();
        host.expect_add_style_addon().never();

        let configurator = ProjectConfigurator::new(environment(None), filesystem(false));
        let err = configurator
            .configure(ProjectOptions::default(), Path::new("app"), &mut host)
            .unwrap_err();

        assert!(err.is_missing_credentials());
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::MissingCredentials {
                variable: "REMIX_TOKEN",
                ..
            })
        ));
    }

    #[test]
    fn tailwind_registered_exactly_once() {
        let (mut host, ..) = recording_host();
        host.expect_add_style_addon()
            .withf(|addon| *addon == StyleAddOn::Tailwind)
            .times(1)
            .return_const(());

        let configurator = ProjectConfigurator::new(environment(Some("x")), filesystem(false));
        let options = ProjectOptions {
            tailwind: Some(true),
            ..Default::default()
        };

        assert!(
            configurator
                .configure(options, Path::new("app"), &mut host)
                .unwrap()
                .tailwind
        );
    }

    #[test]
    fn legacy_provider_key_is_honoured() {
        let (mut host, _, _, tasks) = recording_host();
        host.expect_add_style_addon().never();

        let configurator = ProjectConfigurator::new(environment(Some("x")), filesystem(false));
        let options = ProjectOptions {
            depolyment_provider: Some(DeploymentProvider::Vercel),
            ..Default::default()
        };
        let resolved = configurator
            .configure(options, Path::new("app"), &mut host)
            .unwrap();

        assert_eq!(resolved.deployment_provider, DeploymentProvider::Vercel);
        assert_eq!(*tasks.lock().unwrap(), ["predeploy", "deploy", "start"]);
    }

    #[test]
    fn git_ignore_lists_both_build_directories() {
        let mut host = MockProjectHost::new();
        host.expect_add_file().return_const(());
        host.expect_add_dependency().return_const(());
        host.expect_add_task().return_const(());
        host.expect_add_git_ignore()
            .withf(|section| {
                section.heading == "# Remix build output"
                    && section.patterns == ["/out/client", "/out/server"]
            })
            .times(1)
            .return_const(());

        let configurator = ProjectConfigurator::new(environment(Some("x")), filesystem(false));
        let options = ProjectOptions {
            browser_build_directory: Some("out/client".into()),
            server_build_directory: Some("out/server".into()),
            ..Default::default()
        };
        configurator
            .configure(options, Path::new("app"), &mut host)
            .unwrap();
    }

    #[test]
    fn credential_source_checks_project_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path == Path::new("projects/site/.npmrc"))
            .times(1)
            .return_const(true);

        let configurator = ProjectConfigurator::new(environment(None), Box::new(fs));
        assert_eq!(
            configurator
                .credential_source(Path::new("projects/site"))
                .unwrap(),
            CredentialSource::ExistingFile
        );
    }
}
