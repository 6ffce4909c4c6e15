//! Error handling for the relay-maker CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use relay_maker_core::error::MakerError;

pub use relay_maker_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or rendered.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `relay-maker-core`.
    ///
    /// Core messages are already phrased for the operator, so they are shown
    /// as-is.
    #[error(transparent)]
    Core(#[from] MakerError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Inspect the effective values with 'relay-maker config list'".into(),
                "Find the config file with 'relay-maker config path'".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Configuration => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::External => ErrorCategory::External,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category       | Code |
    /// |----------------|------|
    /// | User error     |  2   |
    /// | Configuration  |  4   |
    /// | External tool  |  5   |
    /// | Internal       |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::External => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain (when `verbose`), and suggestions, with ANSI
    /// styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_string();
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
                Style::Dim => text.dimmed().to_string(),
            }
        };

        let mut out = format!("\n{} {}\n", paint("Error:", Style::Error), self);

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  {} {err}\n", paint("Caused by:", Style::Dim)));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:", Style::Heading)));
            for line in suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", Style::Dim)
            ));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::External => tracing::error!("External tool error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Heading,
    Dim,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing options or a target that already exists.
    UserError,
    /// Configuration error.
    Configuration,
    /// git, composer or the rename script failed.
    External,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use relay_maker_core::application::ApplicationError;
    use relay_maker_core::domain::DomainError;

    use super::*;

    fn missing(option: &'static str) -> CliError {
        CliError::Core(DomainError::MissingRequiredOption { option }.into())
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn target_exists_suggests_removal() {
        let err = CliError::Core(
            ApplicationError::TargetExists {
                path: PathBuf::from("/srv/app/bundles/dbp-relay-greeting-bundle"),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("rm -rf")));
    }

    #[test]
    fn config_error_points_to_config_commands() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("config list")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_missing_option() {
        assert_eq!(missing("vendor").exit_code(), 2);
    }

    #[test]
    fn exit_code_target_exists() {
        let err = CliError::Core(
            ApplicationError::TargetExists {
                path: PathBuf::from("/x"),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_external() {
        let err = CliError::Core(
            ApplicationError::CommandFailed {
                command: "composer require x".into(),
                status: Some(1),
                stderr: String::new(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e")
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn missing_option_message_is_unwrapped() {
        assert_eq!(missing("vendor").to_string(), "--vendor must be provided");
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = missing("friendly-name").format_plain(false);
        assert!(s.contains("Error: --friendly-name must be provided"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn colored_and_plain_share_text() {
        let err = missing("vendor");
        let colored = err.format_colored(false);
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("--vendor must be provided"));
        assert!(!err.format_plain(false).contains("\x1b["));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing output".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }
}
