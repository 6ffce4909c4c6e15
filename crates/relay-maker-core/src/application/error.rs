//! Application layer errors.
//!
//! These errors represent failures while driving the pipeline, not
//! invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during pipeline orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The clone target is already on disk. Nothing was touched.
    #[error("'{path}' already exists. aborting.")]
    TargetExists { path: PathBuf },

    /// An external tool ran and exited unsuccessfully.
    #[error("command `{command}` failed ({})", describe_status(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// An external tool could not be started at all.
    #[error("command `{command}` could not be started: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state of an adapter was poisoned by a panicking thread.
    #[error("adapter state lock poisoned")]
    LockPoisoned,

    /// Reading the operator's answer failed.
    #[error("confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A path that has to be passed to an external tool is not UTF-8.
    #[error("'{}' is not valid UTF-8 and cannot be passed to git", .path.display())]
    NonUtf8Path { path: PathBuf },
}

const NO_ROLLBACK: &str = "Steps completed before the failure are not rolled back";

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => {
                let path = path.display();
                vec![
                    format!("Directory already exists: {path}"),
                    "Choose a different --unique-name".into(),
                    format!("Or remove the existing directory: rm -rf {path}"),
                ]
            }
            Self::CommandFailed { stderr, .. } => {
                let mut out = vec!["Check the command output below for details".to_string()];
                out.extend(
                    stderr
                        .lines()
                        .filter(|l| !l.trim().is_empty())
                        .map(|l| format!("  | {l}")),
                );
                out.push(NO_ROLLBACK.into());
                out
            }
            Self::CommandSpawn { .. } => vec![
                "Ensure the command is installed and in your PATH".into(),
                "Tool names can be overridden in the [tools] config section".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::NonUtf8Path { .. } => {
                vec!["Pass a --project-root whose path is valid UTF-8".into()]
            }
            Self::LockPoisoned | Self::PromptFailed { .. } => {
                vec!["Check the error details above".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Conflict,
            Self::NonUtf8Path { .. } => ErrorCategory::Configuration,
            Self::CommandFailed { .. } | Self::CommandSpawn { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } | Self::LockPoisoned | Self::PromptFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_message_names_command_and_status() {
        let err = ApplicationError::CommandFailed {
            command: "git clone x y".into(),
            status: Some(128),
            stderr: "fatal: repository not found\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "command `git clone x y` failed (exit code 128)"
        );
        let hints = err.suggestions().join("\n");
        assert!(hints.contains("  | fatal: repository not found"));
        assert_eq!(err.category(), ErrorCategory::External);
    }

    #[test]
    fn signal_termination_is_described() {
        let err = ApplicationError::CommandFailed {
            command: "composer require".into(),
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn target_exists_is_a_conflict() {
        let err = ApplicationError::TargetExists {
            path: PathBuf::from("/p/bundles/x"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.to_string().contains("already exists"));
    }
}
