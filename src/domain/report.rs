//! Outcome of a bootstrap run.

use crate::domain::{Consent, Subproject};

/// What happened to `config.env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileStatus {
    Created,
    AlreadyPresent,
    /// Neither the config file nor its template exists. Not an error.
    TemplateMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadsStatus {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Consent was negative; manual instructions were printed.
    Skipped,
    Completed,
    /// The first failing subproject. Later subprojects were not attempted.
    Failed { subproject: Subproject, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub config: ConfigFileStatus,
    pub uploads: UploadsStatus,
    pub consent: Consent,
    pub install: InstallOutcome,
}

impl BootstrapReport {
    pub fn install_failed(&self) -> bool {
        matches!(self.install, InstallOutcome::Failed { .. })
    }
}
