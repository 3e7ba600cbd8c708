use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::console::Term;
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::ConsentPrompt;

/// Prompt bound to the process's stdin.
///
/// Uses a dialoguer line editor when stdin and stdout are terminals and falls
/// back to a plain line read otherwise. The question goes to stdout either way.
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() && io::stdout().is_terminal() }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsentPrompt for TerminalPrompt {
    fn read_line(&mut self, question: &str) -> Result<String, AppError> {
        if !self.interactive {
            return LinePrompt::new(io::stdin().lock(), io::stdout()).read_line(question);
        }

        // dialoguer appends its own ": " separator.
        let label = question.trim_end().trim_end_matches(':');
        let input = Input::<String>::new().with_prompt(label).allow_empty(true);
        match input.interact_text_on(&Term::stdout()) {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Ok(String::new())
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

/// Line-oriented prompt over arbitrary reader/writer pairs.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConsentPrompt for LinePrompt<R, W> {
    fn read_line(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        // Bytes, not `read_line`: undecodable input is still an answer.
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line).map_err(|e| AppError::Prompt(e.to_string()))?;
        Ok(String::from_utf8_lossy(&line).trim_end_matches(['\r', '\n']).to_string())
    }
}
