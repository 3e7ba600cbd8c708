mod consent_prompt;
mod dependency_installer;
mod status_reporter;

pub use consent_prompt::ConsentPrompt;
pub use dependency_installer::DependencyInstaller;
pub use status_reporter::{StatusLevel, StatusReporter};
