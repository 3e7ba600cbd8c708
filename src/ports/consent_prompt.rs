use crate::domain::AppError;

/// Port for the interactive line channel the consent question is asked on.
///
/// A handle is read from at most once per bootstrap run and released when
/// dropped.
pub trait ConsentPrompt {
    /// Show `question` and block until one line of input is available.
    ///
    /// End of input yields an empty string.
    fn read_line(&mut self, question: &str) -> Result<String, AppError>;
}
