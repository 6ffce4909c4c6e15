//! Terminal rendering of the preview and the pipeline progress bar.

use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

use relay_maker_core::application::{PipelineStep, ScaffoldReporter};
use relay_maker_core::domain::PreviewRow;

use crate::cli::OutputFormat;
use crate::output::OutputManager;

const BAR_TEMPLATE: &str = " {pos}/{len} [{bar:28}] {percent:>3}% -- {msg}";

/// [`ScaffoldReporter`] backed by the terminal.
///
/// In JSON mode the preview is kept for the final document on stdout. When
/// the operator still has to confirm, it is also echoed on stderr.
pub struct TerminalReporter<'a> {
    output: &'a OutputManager,
    bar: ProgressBar,
    show_progress: bool,
    echo_json_preview: bool,
    captured: RefCell<Vec<PreviewRow>>,
}

impl<'a> TerminalReporter<'a> {
    pub fn new(output: &'a OutputManager, show_progress: bool) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden());
        bar.set_style(bar_style());

        Self {
            output,
            bar,
            show_progress: show_progress && !output.is_quiet() && !is_json(output),
            echo_json_preview: false,
            captured: RefCell::new(Vec::new()),
        }
    }

    /// Also print the preview on stderr in JSON mode.
    pub fn echo_preview_to_stderr(mut self, echo: bool) -> Self {
        self.echo_json_preview = echo;
        self
    }

    /// Rows seen by [`ScaffoldReporter::preview`] in JSON mode.
    pub fn captured_preview(&self) -> Vec<PreviewRow> {
        self.captured.borrow().clone()
    }

    /// Leave the bar where a failing step stopped it.
    pub fn abandon(&self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

impl ScaffoldReporter for TerminalReporter<'_> {
    fn preview(&self, rows: &[PreviewRow]) {
        let printed = if is_json(self.output) {
            self.captured.borrow_mut().extend_from_slice(rows);
            if !self.echo_json_preview {
                return;
            }
            self.output.preview_to_stderr(rows)
        } else {
            self.output.preview(rows)
        };
        if let Err(e) = printed {
            warn!("Failed to print preview: {e}");
        }
    }

    fn pipeline_started(&self, total_steps: u64) {
        self.bar.set_length(total_steps);
        if self.show_progress {
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
            self.bar.enable_steady_tick(Duration::from_millis(120));
        }
    }

    fn step_started(&self, step: PipelineStep) {
        self.bar.set_message(step.message());
    }

    fn step_completed(&self, _step: PipelineStep) {
        self.bar.inc(1);
    }

    fn pipeline_finished(&self) {
        self.bar.finish();
    }
}

fn is_json(output: &OutputManager) -> bool {
    output.format() == OutputFormat::Json
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
