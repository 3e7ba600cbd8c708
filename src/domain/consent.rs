//! Installation consent parsing.

/// The user's answer to the dependency-installation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Affirmative,
    Negative,
}

impl Consent {
    /// Interpret one line of input.
    ///
    /// Only `y` and `yes` (any case) are affirmative. Line terminators are
    /// stripped; other whitespace is significant.
    pub fn parse(answer: &str) -> Self {
        let answer = answer.trim_end_matches(['\r', '\n']);
        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            Consent::Affirmative
        } else {
            Consent::Negative
        }
    }

    pub fn is_affirmative(self) -> bool {
        matches!(self, Consent::Affirmative)
    }
}
