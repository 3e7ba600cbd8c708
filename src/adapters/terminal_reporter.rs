use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use crate::ports::{StatusLevel, StatusReporter};

const RESET: &str = "\x1b[0m";

/// Writes status lines to stdout, errors to stderr, with ANSI colors on
/// whichever of the two is attached to a terminal.
pub struct TerminalReporter<O = Stdout, E = Stderr> {
    out: O,
    err: E,
    out_colored: bool,
    err_colored: bool,
}

impl TerminalReporter {
    pub fn stdio() -> Self {
        let allowed = std::env::var_os("NO_COLOR").is_none();
        Self {
            out: io::stdout(),
            err: io::stderr(),
            out_colored: allowed && io::stdout().is_terminal(),
            err_colored: allowed && io::stderr().is_terminal(),
        }
    }
}

impl<O: Write, E: Write> TerminalReporter<O, E> {
    pub fn new(out: O, err: E, out_colored: bool, err_colored: bool) -> Self {
        Self { out, err, out_colored, err_colored }
    }

    fn color(level: StatusLevel) -> Option<&'static str> {
        match level {
            StatusLevel::Plain => None,
            StatusLevel::Notice => Some("\x1b[36m"),
            StatusLevel::Success => Some("\x1b[32m"),
            StatusLevel::Warning => Some("\x1b[33m"),
            StatusLevel::Error => Some("\x1b[31m"),
        }
    }
}

impl<O: Write, E: Write> StatusReporter for TerminalReporter<O, E> {
    fn report(&mut self, level: StatusLevel, message: &str) {
        let colored = match level {
            StatusLevel::Error => self.err_colored,
            _ => self.out_colored,
        };
        let line = match Self::color(level) {
            Some(color) if colored && !message.is_empty() => {
                format!("{color}{message}{RESET}")
            }
            _ => message.to_string(),
        };

        // Nothing sensible to do if the terminal is gone.
        let _ = match level {
            StatusLevel::Error => writeln!(self.err, "{line}").and_then(|_| self.err.flush()),
            _ => writeln!(self.out, "{line}").and_then(|_| self.out.flush()),
        };
    }
}
