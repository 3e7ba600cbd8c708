//! portal-setup: prepare a job portal checkout for first run.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{SetupOptions, setup, setup_with_prompt};
pub use domain::{
    AppError, BootstrapReport, ConfigFileStatus, Consent, InstallOutcome, SetupConfig,
    Subproject, UploadsStatus,
};
