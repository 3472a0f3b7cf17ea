//! Manifest-backed project host.
//!
//! [`ManifestProject`] records what the configurator registers and turns it
//! into real files: `package.json`, `.gitignore`, every registered
//! [`GeneratedFile`](remixgen_core::domain::GeneratedFile), and whatever the
//! enabled add-ons bring along.

mod manifest;
mod package_json;
mod tailwind;

pub use manifest::{
    DEFAULT_IGNORES, GITIGNORE_PATH, ManifestProject, PACKAGE_JSON_PATH, PlannedFile, ProjectPlan,
    SynthesisReport,
};
pub use package_json::PackageJson;
pub use tailwind::{PostCssConfigFile, TailwindConfigFile, tailwind_dependencies};
