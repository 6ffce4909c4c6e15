//! Process runner using `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use relay_maker_core::{
    application::{ApplicationError, CommandOutput, CommandRunner},
    error::MakerResult,
};
use tracing::{debug, instrument, trace};

/// Production runner: spawns the program and blocks until it exits.
///
/// stdin is closed; stdout and stderr are captured. There is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(program = %program, dir = %working_dir.display()))]
    fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> MakerResult<CommandOutput> {
        let resolved = resolve_program(program, working_dir);

        let output = Command::new(&resolved)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::CommandSpawn {
                command: program.to_string(),
                reason: e.to_string(),
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(status = ?result.status, "Process exited");
        trace!(stdout = %result.stdout, stderr = %result.stderr, "Process output");

        Ok(result)
    }
}

/// `./script` and `../script` are relative to the working directory, not to
/// our own current directory.
fn resolve_program(program: &str, working_dir: &Path) -> PathBuf {
    if program.starts_with("./") || program.starts_with("../") {
        working_dir.join(program)
    } else {
        PathBuf::from(program)
    }
}
