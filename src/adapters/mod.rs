pub mod package_manager;
pub mod terminal_prompt;
pub mod terminal_reporter;

pub use package_manager::PackageManagerInstaller;
pub use terminal_prompt::{LinePrompt, TerminalPrompt};
pub use terminal_reporter::TerminalReporter;
