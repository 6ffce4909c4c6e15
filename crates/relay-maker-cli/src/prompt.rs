//! The operator's yes/no confirmation.

use std::io::{self, BufRead, IsTerminal, Write};

use relay_maker_core::application::{ApplicationError, Prompt};
use relay_maker_core::error::MakerResult;

/// [`Prompt`] reading from the terminal.
///
/// Uses a dialoguer confirmation when both stdin and stderr are terminals
/// and the `interactive` feature is on; otherwise a line is read from
/// stdin. The default answer is always "no".
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> MakerResult<bool> {
        #[cfg(feature = "interactive")]
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(|e| prompt_failed(&e).into());
        }

        let stdin = io::stdin();
        let mut stderr = io::stderr();
        read_answer(question, &mut stdin.lock(), &mut stderr)
    }
}

/// Ask `question` on `out` and read one answer line from `input`.
///
/// Any answer starting with `y` (any case) confirms; anything else,
/// including end of input, declines.
pub fn read_answer<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> MakerResult<bool> {
    write!(out, "{question} (y/N) ").map_err(|e| prompt_failed(&e))?;
    out.flush().map_err(|e| prompt_failed(&e))?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| prompt_failed(&e))?;

    Ok(line.trim_start().starts_with(['y', 'Y']))
}

fn prompt_failed(err: &dyn std::error::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: err.to_string(),
    }
}
