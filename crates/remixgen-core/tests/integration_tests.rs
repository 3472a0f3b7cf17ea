//! Integration tests for remixgen-core.
//!
//! Drive the configurator through its public API with small hand-written
//! port implementations and check what lands on the host.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use remixgen_core::{
    application::{Environment, Filesystem, ProjectConfigurator, ProjectHost},
    domain::{GeneratedFile, TaskCategory},
    error::CoreResult,
    prelude::*,
};

#[derive(Default)]
struct FixedEnvironment(HashMap<String, String>);

impl FixedEnvironment {
    fn with_token(token: &str) -> Self {
        Self(HashMap::from([("REMIX_TOKEN".to_string(), token.to_string())]))
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Only answers `exists`; the configurator never writes.
#[derive(Default)]
struct ExistingPaths(HashSet<PathBuf>);

impl Filesystem for ExistingPaths {
    fn create_dir_all(&self, _: &Path) -> CoreResult<()> {
        unreachable!("configurator does not write")
    }
    fn write_file(&self, _: &Path, _: &str) -> CoreResult<()> {
        unreachable!("configurator does not write")
    }
    fn set_readonly(&self, _: &Path, _: bool) -> CoreResult<()> {
        unreachable!("configurator does not write")
    }
    fn exists(&self, path: &Path) -> bool {
        self.0.contains(path)
    }
    fn read_to_string(&self, _: &Path) -> CoreResult<String> {
        unreachable!("configurator does not read")
    }
    fn remove_file(&self, _: &Path) -> CoreResult<()> {
        unreachable!("configurator does not write")
    }
}

#[derive(Debug)]
enum Event {
    File(String),
    GitIgnore(GitIgnoreSection),
    Dependency(Dependency),
    Task(Task),
    AddOn(StyleAddOn),
}

#[derive(Default)]
struct RecordingHost {
    events: Vec<Event>,
    files: Vec<Box<dyn GeneratedFile>>,
}

impl RecordingHost {
    fn tasks(&self) -> Vec<&Task> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Task(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn dependencies(&self) -> Vec<&Dependency> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Dependency(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    fn file(&self, path: &str) -> Option<&dyn GeneratedFile> {
        self.files
            .iter()
            .find(|f| f.path().as_str() == path)
            .map(|f| f.as_ref())
    }
}

impl ProjectHost for RecordingHost {
    fn add_file(&mut self, file: Box<dyn GeneratedFile>) {
        self.events.push(Event::File(file.path().to_string()));
        self.files.push(file);
    }
    fn add_git_ignore(&mut self, section: GitIgnoreSection) {
        self.events.push(Event::GitIgnore(section));
    }
    fn add_dependency(&mut self, dependency: Dependency) {
        self.events.push(Event::Dependency(dependency));
    }
    fn add_task(&mut self, task: Task) {
        self.events.push(Event::Task(task));
    }
    fn add_style_addon(&mut self, addon: StyleAddOn) {
        self.events.push(Event::AddOn(addon));
    }
}

fn configurator(env: FixedEnvironment, fs: ExistingPaths) -> ProjectConfigurator {
    ProjectConfigurator::new(Box::new(env), Box::new(fs))
}

#[test]
fn express_project_end_to_end() {
    let mut host = RecordingHost::default();
    let resolved = configurator(FixedEnvironment::with_token("abc"), ExistingPaths::default())
        .configure(ProjectOptions::default(), Path::new("my-app"), &mut host)
        .unwrap();

    assert_eq!(resolved.deployment_provider, DeploymentProvider::Express);

    // Framework config and ignores come first, in that order.
    assert!(matches!(&host.events[0], Event::File(p) if p == "remix.config.js"));
    assert!(matches!(&host.events[1], Event::GitIgnore(s) if s.patterns == ["/public/build", "/build"]));
    assert!(matches!(&host.events[2], Event::File(p) if p == ".npmrc"));

    let npmrc = host.file(".npmrc").unwrap();
    assert!(!npmrc.committed());
    assert!(npmrc.synthesize().unwrap().contains("_authToken=abc"));

    let config = host.file("remix.config.js").unwrap();
    assert!(config.readonly());
    assert!(config.synthesize().unwrap().contains("devServerPort: 8002"));

    assert!(host.file("pm2.config.js").is_some());

    let tasks: Vec<_> = host.tasks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tasks, ["build", "dev", "start"]);

    assert!(!host.events.iter().any(|e| matches!(e, Event::AddOn(_))));
}

#[test]
fn vercel_project_with_existing_credentials() {
    let mut host = RecordingHost::default();
    let fs = ExistingPaths(HashSet::from([PathBuf::from("site/.npmrc")]));
    let options = ProjectOptions {
        deployment_provider: Some(DeploymentProvider::Vercel),
        dev_server_port: Some(0),
        tailwind: Some(true),
        ..Default::default()
    };

    configurator(FixedEnvironment::default(), fs)
        .configure(options, Path::new("site"), &mut host)
        .unwrap();

    assert!(host.file(".npmrc").is_none());
    assert!(host.file("pm2.config.js").is_none());
    assert!(
        host.file("remix.config.js")
            .unwrap()
            .synthesize()
            .unwrap()
            .contains("devServerPort: 0\n")
    );

    let release: Vec<_> = host
        .tasks()
        .into_iter()
        .filter(|t| t.category == TaskCategory::Release)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(release, ["deploy", "start"]);

    let addons = host
        .events
        .iter()
        .filter(|e| matches!(e, Event::AddOn(StyleAddOn::Tailwind)))
        .count();
    assert_eq!(addons, 1);

    assert!(
        host.dependencies()
            .iter()
            .any(|d| d.name == "concurrently" && d.is_dev())
    );
}

#[test]
fn missing_credentials_leaves_partial_registrations() {
    let mut host = RecordingHost::default();
    let err = configurator(FixedEnvironment::default(), ExistingPaths::default())
        .configure(ProjectOptions::default(), Path::new("my-app"), &mut host)
        .unwrap_err();

    assert!(err.is_missing_credentials());
    assert_eq!(host.events.len(), 2);
    assert!(host.dependencies().is_empty());
    assert!(host.tasks().is_empty());
}

#[test]
fn options_parse_from_camel_case_json() {
    let options: ProjectOptions = serde_json::from_str(
        r#"{ "depolymentProvider": "vercel", "devServerPort": 3000, "appDirectory": "src" }"#,
    )
    .unwrap();

    let mut host = RecordingHost::default();
    let resolved = configurator(FixedEnvironment::with_token(""), ExistingPaths::default())
        .configure(options, Path::new("x"), &mut host)
        .unwrap();

    assert_eq!(resolved.deployment_provider, DeploymentProvider::Vercel);
    assert_eq!(resolved.layout.dev_server_port, 3000);
    assert_eq!(resolved.layout.app_directory, "src");
}
