//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use relay_maker_core::domain::PreviewRow;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Width the preview labels are right-aligned to.
pub const LABEL_WIDTH: usize = 25;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// The derived-name table, one `label: value` line per row.
    ///
    /// Printed even in quiet mode: it is what the operator confirms.
    pub fn preview(&self, rows: &[PreviewRow]) -> io::Result<()> {
        write_preview(&self.term, rows, self.no_color)
    }

    /// [`Self::preview`] on stderr without colours, for when stdout is
    /// reserved for a JSON document.
    pub fn preview_to_stderr(&self, rows: &[PreviewRow]) -> io::Result<()> {
        write_preview(&Term::stderr(), rows, true)
    }


    /// Pretty-printed JSON document on stdout. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn write_preview(term: &Term, rows: &[PreviewRow], plain: bool) -> io::Result<()> {
    for row in rows {
        term.write_line(&preview_line(row, plain))?;
    }
    term.write_line("")
}

fn preview_line(row: &PreviewRow, plain: bool) -> String {
    if plain {
        format!("{:>LABEL_WIDTH$}: {}", row.label, row.value)
    } else {
        format!("{:>LABEL_WIDTH$}: {}", row.label.bold(), row.value.green())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
