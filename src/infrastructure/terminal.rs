//! Standard input/output implementation of `Prompter`.

use std::io::{BufRead, Write};

use crate::application::ports::Prompter;
use crate::domain::{AppError, Result};

/// Prompter backed by any reader/writer pair; stdin/stdout in production.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, Box<dyn Write>> {
    /// Prompter reading stdin and writing to stdout, or to stderr when
    /// stdout is reserved for machine-readable output.
    #[must_use]
    pub fn stdio(to_stderr: bool) -> Self {
        let output: Box<dyn Write> = if to_stderr {
            Box::new(std::io::stderr())
        } else {
            Box::new(std::io::stdout())
        };
        Self::new(std::io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn show(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(|e| AppError::io("Failed to write prompt", e))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| AppError::io("Failed to read answer", e))?;

        // EOF counts as an empty answer.
        if read == 0 {
            tracing::debug!("Input closed while prompting");
        }

        Ok(answer.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }
}
