use crate::ports::{StatusLevel, StatusReporter};

/// Reporter double keeping every line in order.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Vec<(StatusLevel, String)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(text))
    }

    pub fn lines_at(&self, level: StatusLevel) -> Vec<&str> {
        self.lines.iter().filter(|(l, _)| *l == level).map(|(_, line)| line.as_str()).collect()
    }

    /// Position of the first line containing `text`.
    pub fn position(&self, text: &str) -> Option<usize> {
        self.lines.iter().position(|(_, line)| line.contains(text))
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&mut self, level: StatusLevel, message: &str) {
        self.lines.push((level, message.to_string()));
    }
}
