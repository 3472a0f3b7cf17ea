//! Project host backed by `package.json`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use remixgen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProjectHost},
    },
    domain::{Dependency, GeneratedFile, GitIgnoreSection, RelativePath, StyleAddOn, Task},
    error::CoreResult,
};

use super::{
    package_json::PackageJson,
    tailwind::{PostCssConfigFile, TailwindConfigFile, tailwind_dependencies},
};

pub const PACKAGE_JSON_PATH: &str = "package.json";
pub const GITIGNORE_PATH: &str = ".gitignore";

/// Entries every generated `.gitignore` starts with.
pub const DEFAULT_IGNORES: [&str; 3] = ["node_modules/", ".npmrc", "/.cache"];

/// In-memory project model that synthesizes to disk.
#[derive(Debug)]
pub struct ManifestProject {
    name: String,
    app_directory: String,
    files: Vec<Box<dyn GeneratedFile>>,
    git_ignore: Vec<GitIgnoreSection>,
    dependencies: Vec<Dependency>,
    tasks: Vec<Task>,
    addons: Vec<StyleAddOn>,
}

/// A file as it will be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: RelativePath,
    pub readonly: bool,
    pub committed: bool,
}

/// Everything synthesis would produce, without file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub name: String,
    pub files: Vec<PlannedFile>,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
    pub tasks: Vec<Task>,
    pub git_ignore: Vec<String>,
    pub addons: Vec<StyleAddOn>,
}

/// Result of a successful synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisReport {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

struct Output {
    path: RelativePath,
    content: String,
    readonly: bool,
}

/// A path touched by synthesis and what it held before.
struct Written {
    path: PathBuf,
    previous: Option<String>,
}

impl ManifestProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app_directory: remixgen_core::domain::options::DEFAULT_APP_DIRECTORY.to_string(),
            files: Vec::new(),
            git_ignore: Vec::new(),
            dependencies: Vec::new(),
            tasks: Vec::new(),
            addons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory add-ons scan for sources. Defaults to `app`.
    pub fn set_app_directory(&mut self, app_directory: impl Into<String>) {
        self.app_directory = app_directory.into();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn addons(&self) -> &[StyleAddOn] {
        &self.addons
    }

    /// Registered dependencies followed by those the add-ons bring.
    pub fn dependencies(&self) -> Vec<Dependency> {
        let mut all = self.dependencies.clone();
        for addon in &self.addons {
            match addon {
                StyleAddOn::Tailwind => all.extend(tailwind_dependencies()),
            }
        }
        all
    }

    /// Visit registered files, then those the add-ons bring.
    fn each_descriptor(&self, mut visit: impl FnMut(&dyn GeneratedFile)) {
        for file in &self.files {
            visit(file.as_ref());
        }
        for addon in &self.addons {
            match addon {
                StyleAddOn::Tailwind => {
                    visit(&TailwindConfigFile::new(self.app_directory.as_str()));
                    visit(&PostCssConfigFile::new());
                }
            }
        }
    }

    pub fn package_json(&self) -> PackageJson {
        PackageJson::new(&self.name, &self.dependencies(), &self.tasks)
    }

    /// `.gitignore` lines: defaults, uncommitted files, then each section.
    pub fn git_ignore_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect();

        for file in &self.files {
            let path = file.path().as_str();
            if !file.committed() && !DEFAULT_IGNORES.contains(&path) {
                lines.push(format!("/{path}"));
            }
        }

        for section in &self.git_ignore {
            lines.push(String::new());
            lines.extend(section.lines().map(String::from));
        }

        lines
    }

    pub fn plan(&self) -> ProjectPlan {
        let mut files = vec![
            PlannedFile {
                path: RelativePath::new(PACKAGE_JSON_PATH),
                readonly: false,
                committed: true,
            },
            PlannedFile {
                path: RelativePath::new(GITIGNORE_PATH),
                readonly: true,
                committed: true,
            },
        ];
        self.each_descriptor(|file| {
            if file.synthesize().is_some() {
                files.push(PlannedFile {
                    path: file.path().clone(),
                    readonly: file.readonly(),
                    committed: file.committed(),
                });
            }
        });

        let (dev_dependencies, dependencies): (Vec<_>, Vec<_>) =
            self.dependencies().into_iter().partition(Dependency::is_dev);

        ProjectPlan {
            name: self.name.clone(),
            files,
            dependencies,
            dev_dependencies,
            tasks: self.tasks.clone(),
            git_ignore: self.git_ignore_lines(),
            addons: self.addons.clone(),
        }
    }

    /// Write every output under `root`.
    ///
    /// Existing files are overwritten, read-only ones included. On failure
    /// files this call overwrote get their prior content back, files it
    /// created are removed, and the error is returned.
    #[instrument(skip_all, fields(project = %self.name, root = %root.display()))]
    pub fn synthesize(&self, fs: &dyn Filesystem, root: &Path) -> CoreResult<SynthesisReport> {
        let outputs = self.outputs()?;
        info!(files = outputs.len(), "Synthesizing project");

        fs.create_dir_all(root)?;

        let mut journal = Vec::with_capacity(outputs.len());
        match Self::write_all(fs, root, &outputs, &mut journal) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(SynthesisReport {
                    root: root.to_path_buf(),
                    files: journal.into_iter().map(|entry| entry.path).collect(),
                })
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                Self::rollback(fs, &journal);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn outputs(&self) -> CoreResult<Vec<Output>> {
        let package_json =
            self.package_json()
                .to_json()
                .map_err(|e| ApplicationError::SynthesisFailed {
                    reason: format!("{PACKAGE_JSON_PATH}: {e}"),
                })?;

        let mut gitignore = self.git_ignore_lines().join("\n");
        gitignore.push('\n');

        let mut outputs = vec![
            Output {
                path: RelativePath::new(PACKAGE_JSON_PATH),
                content: package_json,
                readonly: false,
            },
            Output {
                path: RelativePath::new(GITIGNORE_PATH),
                content: gitignore,
                readonly: true,
            },
        ];

        self.each_descriptor(|file| match file.synthesize() {
            Some(content) => outputs.push(Output {
                path: file.path().clone(),
                content,
                readonly: file.readonly(),
            }),
            None => debug!(path = %file.path(), "File produced no content, skipping"),
        });

        Ok(outputs)
    }

    fn write_all(
        fs: &dyn Filesystem,
        root: &Path,
        outputs: &[Output],
        journal: &mut Vec<Written>,
    ) -> CoreResult<()> {
        for output in outputs {
            let path = root.join(output.path.as_path());

            if let Some(parent) = path.parent() {
                fs.create_dir_all(parent)?;
            }

            let previous = if fs.exists(&path) {
                let content = fs.read_to_string(&path)?;
                fs.set_readonly(&path, false)?;
                Some(content)
            } else {
                None
            };

            // Journaled before the write so a half-written file is undone too.
            journal.push(Written {
                path: path.clone(),
                previous,
            });
            fs.write_file(&path, &output.content)?;
            debug!(path = %output.path, readonly = output.readonly, "Wrote file");

            if output.readonly {
                fs.set_readonly(&path, true)?;
            }
        }

        Ok(())
    }

    /// Best-effort undo of a failed run: overwritten files get their prior
    /// content back, created files are removed.
    fn rollback(fs: &dyn Filesystem, journal: &[Written]) {
        for entry in journal.iter().rev() {
            let path = &entry.path;
            let undone = match &entry.previous {
                Some(content) => fs
                    .set_readonly(path, false)
                    .and_then(|()| fs.write_file(path, content)),
                None if fs.exists(path) => fs
                    .set_readonly(path, false)
                    .and_then(|()| fs.remove_file(path)),
                None => Ok(()),
            };
            if let Err(e) = undone {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        info!(files = journal.len(), "Rollback finished");
    }
}

impl ProjectHost for ManifestProject {
    fn add_file(&mut self, file: Box<dyn GeneratedFile>) {
        debug!(path = %file.path(), "File registered");
        self.files.push(file);
    }

    fn add_git_ignore(&mut self, section: GitIgnoreSection) {
        self.git_ignore.push(section);
    }

    fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn add_style_addon(&mut self, addon: StyleAddOn) {
        if !self.addons.contains(&addon) {
            self.addons.push(addon);
        }
    }
}
