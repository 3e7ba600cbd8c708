use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for portal-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `setup.toml` could not be parsed.
    #[error("Invalid setup.toml: {0}")]
    ConfigInvalid(String),

    /// A configured subproject directory is not a plain relative path.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The consent prompt could not be read.
    #[error("Failed to read answer: {0}")]
    Prompt(String),

    /// The package manager could not be spawned or exited unsuccessfully.
    #[error("'{program}' failed in {}: {details}", .dir.display())]
    InstallFailed { program: String, dir: PathBuf, details: String },
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::ConfigInvalid(value.message().to_string())
    }
}
