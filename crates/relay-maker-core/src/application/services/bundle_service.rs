//! Bundle Service - the bundle creation pipeline.
//!
//! This service coordinates one run of the bundle maker:
//! 1. Show the preview of every derived identifier
//! 2. Ask for confirmation (unless disabled)
//! 3. Stop here on a dry run
//! 4. Run the five pipeline steps, each gated on the previous one
//! 5. Hand a summary back to the caller
//!
//! Failures are fatal and are not rolled back: a half-cloned directory stays
//! where it is.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, PipelineSettings,
        ports::{CommandOutput, CommandRunner, Filesystem, Prompt, ScaffoldReporter},
    },
    domain::BundleRequest,
    error::MakerResult,
};

/// Question asked before the pipeline starts.
pub const CONFIRM_QUESTION: &str = "Continue?";

/// One stage of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    CreateDirectory,
    CloneTemplate,
    RenameTemplate,
    RegisterPackage,
    InstallPackage,
}

impl PipelineStep {
    pub const ALL: [PipelineStep; 5] = [
        Self::CreateDirectory,
        Self::CloneTemplate,
        Self::RenameTemplate,
        Self::RegisterPackage,
        Self::InstallPackage,
    ];

    /// Progress message shown while the step runs.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "Create the bundle directory...",
            Self::CloneTemplate => "Clone the bundle template...",
            Self::RenameTemplate => "Rename the template...",
            Self::RegisterPackage => "Register the package with composer...",
            Self::InstallPackage => "Install the package with composer...",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "create-directory",
            Self::CloneTemplate => "clone-template",
            Self::RenameTemplate => "rename-template",
            Self::RegisterPackage => "register-package",
            Self::InstallPackage => "install-package",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutcome {
    /// All five steps succeeded.
    Created(BundleSummary),
    /// Preview only; the pipeline was skipped.
    DryRun,
    /// The operator answered "no".
    Declined,
}

/// What was created by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub package_name: String,
    pub location: PathBuf,
}

impl BundleSummary {
    /// Human-readable report lines.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "* The package '{}' was created under '{}'",
                self.package_name,
                self.location.display()
            ),
            "* The package was added to your composer.json and installed".to_string(),
            "* The containing bundle was registered with your application".to_string(),
        ]
    }
}

/// Bundle creation pipeline.
///
/// One instance per invocation. The host project root and tool names come in
/// through [`PipelineSettings`]; processes and the filesystem go through
/// ports so tests can substitute fakes.
pub struct BundleService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    settings: PipelineSettings,
}

impl BundleService {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            runner,
            filesystem,
            settings,
        }
    }

    /// Where `request` will be cloned.
    pub fn clone_path(&self, request: &BundleRequest) -> PathBuf {
        self.settings.clone_path(&request.names().directory_name())
    }

    /// Preview, confirm, and run the pipeline for `request`.
    #[instrument(
        skip_all,
        fields(
            package = %request.names().composer_package_name(),
            dry_run = request.is_dry_run()
        )
    )]
    pub fn run(
        &self,
        request: &BundleRequest,
        prompt: &dyn Prompt,
        reporter: &dyn ScaffoldReporter,
    ) -> MakerResult<BundleOutcome> {
        let names = request.names();
        reporter.preview(&names.preview());

        if !request.skips_confirmation() && !prompt.confirm(CONFIRM_QUESTION)? {
            info!("Declined by operator");
            return Ok(BundleOutcome::Declined);
        }

        if request.is_dry_run() {
            info!("Dry run, pipeline skipped");
            return Ok(BundleOutcome::DryRun);
        }

        let clone_dir = self.clone_path(request);
        // git gets the target as an argument; refuse before anything is created.
        path_arg(&clone_dir)?;
        reporter.pipeline_started(PipelineStep::ALL.len() as u64);

        for step in PipelineStep::ALL {
            reporter.step_started(step);
            info!(%step, "Running step");
            self.run_step(step, request, &clone_dir)?;
            reporter.step_completed(step);
        }

        reporter.pipeline_finished();
        info!(location = %clone_dir.display(), "Bundle created");

        Ok(BundleOutcome::Created(BundleSummary {
            package_name: names.composer_package_name(),
            location: clone_dir,
        }))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_step(
        &self,
        step: PipelineStep,
        request: &BundleRequest,
        clone_dir: &Path,
    ) -> MakerResult<()> {
        let names = request.names();
        let root = self.settings.project_root();

        match step {
            PipelineStep::CreateDirectory => {
                let bundles = self.settings.bundles_path();
                self.filesystem.create_dir_all(&bundles)?;
                if self.filesystem.exists(clone_dir) {
                    return Err(ApplicationError::TargetExists {
                        path: clone_dir.to_path_buf(),
                    }
                    .into());
                }
            }
            PipelineStep::CloneTemplate => {
                self.invoke(
                    &self.settings.git,
                    vec![
                        "clone".into(),
                        self.settings.template_url.clone(),
                        path_arg(clone_dir)?.to_owned(),
                    ],
                    root,
                )?;
                self.filesystem.remove_dir_all(&clone_dir.join(".git"))?;
            }
            PipelineStep::RenameTemplate => {
                self.invoke(
                    &self.settings.rename_script,
                    vec![
                        format!("--vendor={}", request.vendor()),
                        format!("--category={}", request.category()),
                        format!("--unique-name={}", request.unique_name()),
                        format!("--friendly-name={}", request.friendly_name()),
                        format!("--example-entity={}", request.example_entity()),
                    ],
                    clone_dir,
                )?;
            }
            PipelineStep::RegisterPackage => {
                let dir = names.directory_name();
                self.invoke(
                    &self.settings.composer,
                    vec![
                        "config".into(),
                        format!("repositories.{dir}"),
                        "path".into(),
                        format!("./{}/{dir}", self.settings.bundles_dir),
                    ],
                    root,
                )?;
            }
            PipelineStep::InstallPackage => {
                self.invoke(
                    &self.settings.composer,
                    vec![
                        "require".into(),
                        format!(
                            "{}={}",
                            names.composer_package_name(),
                            self.settings.dev_constraint
                        ),
                    ],
                    root,
                )?;
            }
        }

        Ok(())
    }

    /// Run one external command; a non-zero exit becomes an error.
    fn invoke(
        &self,
        program: &str,
        args: Vec<String>,
        working_dir: &Path,
    ) -> MakerResult<CommandOutput> {
        let command = render_command(program, &args);
        debug!(%command, dir = %working_dir.display(), "Invoking");

        let output = self.runner.run(program, &args, working_dir)?;
        if !output.success() {
            warn!(%command, status = ?output.status, "Command failed");
            return Err(ApplicationError::CommandFailed {
                command,
                status: output.status,
                stderr: output.stderr,
            }
            .into());
        }

        Ok(output)
    }
}

fn path_arg(path: &Path) -> MakerResult<&str> {
    path.to_str().ok_or_else(|| {
        ApplicationError::NonUtf8Path {
            path: path.to_path_buf(),
        }
        .into()
    })
}

fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
