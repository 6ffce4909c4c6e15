//! Pipeline settings injected into [`BundleService`](super::BundleService).

use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/digital-blueprint/relay-template-bundle";
pub const DEFAULT_RENAME_SCRIPT: &str = "./.bundle-rename";
pub const DEFAULT_BUNDLES_DIR: &str = "bundles";
pub const DEFAULT_DEV_CONSTRAINT: &str = "@dev";

/// Where the pipeline runs and which tools it invokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Host project root; composer runs here.
    pub project_root: PathBuf,
    /// Container for cloned bundles, relative to `project_root`.
    pub bundles_dir: String,
    pub template_url: String,
    /// Executable inside the clone that renames the template placeholders.
    pub rename_script: String,
    pub git: String,
    pub composer: String,
    /// Version constraint appended to the package on `composer require`.
    pub dev_constraint: String,
}

impl PipelineSettings {
    /// Settings with every tool at its default.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            bundles_dir: DEFAULT_BUNDLES_DIR.into(),
            template_url: DEFAULT_TEMPLATE_URL.into(),
            rename_script: DEFAULT_RENAME_SCRIPT.into(),
            git: "git".into(),
            composer: "composer".into(),
            dev_constraint: DEFAULT_DEV_CONSTRAINT.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Absolute container directory: `<project_root>/<bundles_dir>`.
    pub fn bundles_path(&self) -> PathBuf {
        self.project_root.join(&self.bundles_dir)
    }

    /// Clone target for a bundle directory name.
    pub fn clone_path(&self, directory_name: &str) -> PathBuf {
        self.bundles_path().join(directory_name)
    }
}
