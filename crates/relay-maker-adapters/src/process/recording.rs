//! Recording process runner for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use relay_maker_core::{
    application::{ApplicationError, CommandOutput, CommandRunner},
    error::MakerResult,
};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    /// `program arg1 arg2 ...`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runner that records every call and never spawns anything.
///
/// Every call succeeds unless an output was scripted for its program with
/// [`Self::respond_to`]. Clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    invocations: Vec<Invocation>,
    responses: HashMap<String, CommandOutput>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `output` for every call of `program`.
    pub fn respond_to(&self, program: impl Into<String>, output: CommandOutput) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.responses.insert(program.into(), output);
        }
        self
    }

    /// All calls so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner
            .read()
            .map(|inner| inner.invocations.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> MakerResult<CommandOutput> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.invocations.push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            working_dir: working_dir.to_path_buf(),
        });

        Ok(inner
            .responses
            .get(program)
            .cloned()
            .unwrap_or_else(CommandOutput::ok))
    }
}
