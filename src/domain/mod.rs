pub mod consent;
pub mod error;
pub mod layout;
pub mod report;
pub mod setup_config;
pub mod subproject;

pub use consent::Consent;
pub use error::AppError;
pub use layout::ProjectLayout;
pub use report::{BootstrapReport, ConfigFileStatus, InstallOutcome, UploadsStatus};
pub use setup_config::{
    PackageManagerConfig, SETUP_CONFIG_FILE, SetupConfig, SubprojectConfig, parse_setup_config,
};
pub use subproject::Subproject;
