//! Setup configuration loading from the project root.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, SETUP_CONFIG_FILE, SetupConfig, parse_setup_config};

/// Command-line values that take precedence over `setup.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub package_manager: Option<String>,
}

/// Load `setup.toml` from `root` if present, then apply overrides.
pub fn load_setup_config(root: &Path, overrides: &ConfigOverrides) -> Result<SetupConfig, AppError> {
    let path = root.join(SETUP_CONFIG_FILE);
    let mut config = if path.is_file() {
        debug!(path = %path.display(), "loading setup config");
        parse_setup_config(&fs::read_to_string(&path)?)?
    } else {
        SetupConfig::default()
    };

    if let Some(program) = &overrides.package_manager {
        config.package_manager.program = program.clone();
        config.validate()?;
    }

    Ok(config)
}
