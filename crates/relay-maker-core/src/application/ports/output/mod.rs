//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::application::services::PipelineStep;
use crate::domain::PreviewRow;
use crate::error::MakerResult;

/// Captured result of one external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A zero exit with no output.
    pub fn ok() -> Self {
        Self {
            status: Some(0),
            ..Self::default()
        }
    }

    /// A non-zero exit carrying `stderr`.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Port for running external processes.
///
/// Implemented by:
/// - `relay_maker_adapters::process::SystemCommandRunner` (production)
/// - `relay_maker_adapters::process::RecordingCommandRunner` (testing)
///
/// Returns `Err` only when the process could not be started. A process that
/// ran and failed is reported through [`CommandOutput::status`]; the caller
/// decides whether that is fatal.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> MakerResult<CommandOutput>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `relay_maker_adapters::filesystem::LocalFilesystem` (production)
/// - `relay_maker_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MakerResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents. A missing path is not an error.
    fn remove_dir_all(&self, path: &Path) -> MakerResult<()>;
}

/// Port for the yes/no question before the pipeline runs.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    fn confirm(&self, question: &str) -> MakerResult<bool>;
}

/// Port for showing the preview and pipeline progress.
///
/// All methods default to doing nothing, so a silent reporter is `struct
/// Silent; impl ScaffoldReporter for Silent {}`.
pub trait ScaffoldReporter {
    fn preview(&self, _rows: &[PreviewRow]) {}

    fn pipeline_started(&self, _total_steps: u64) {}

    fn step_started(&self, _step: PipelineStep) {}

    fn step_completed(&self, _step: PipelineStep) {}

    fn pipeline_finished(&self) {}
}
