/// Severity of a user-facing status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Plain,
    Notice,
    Success,
    Warning,
    Error,
}

/// Port for user-facing progress output.
pub trait StatusReporter {
    fn report(&mut self, level: StatusLevel, message: &str);

    fn blank_line(&mut self) {
        self.report(StatusLevel::Plain, "");
    }
}
