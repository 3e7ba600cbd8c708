//! Setup configuration loaded from `setup.toml`.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Subproject};

/// File name of the optional configuration at the project root.
pub const SETUP_CONFIG_FILE: &str = "setup.toml";

/// Resolved setup configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    pub package_manager: PackageManagerConfig,
    pub backend: SubprojectConfig,
    pub frontend: SubprojectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerConfig {
    /// Executable spawned in each subproject directory.
    pub program: String,
    pub install_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprojectConfig {
    /// Directory relative to the project root.
    pub dir: PathBuf,
    /// Command shown in the post-install hint.
    pub start: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManagerConfig::default(),
            backend: SubprojectConfig::defaults_for(Subproject::Backend),
            frontend: SubprojectConfig::defaults_for(Subproject::Frontend),
        }
    }
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self { program: "npm".to_string(), install_args: vec!["install".to_string()] }
    }
}

impl SubprojectConfig {
    fn defaults_for(subproject: Subproject) -> Self {
        let start = match subproject {
            Subproject::Backend => "npm start",
            Subproject::Frontend => "npm run dev",
        };
        Self { dir: PathBuf::from(subproject.name()), start: start.to_string() }
    }
}

impl SetupConfig {
    pub fn subproject(&self, subproject: Subproject) -> &SubprojectConfig {
        match subproject {
            Subproject::Backend => &self.backend,
            Subproject::Frontend => &self.frontend,
        }
    }

    /// Human-readable install command, e.g. `npm install`.
    pub fn install_command(&self) -> String {
        let mut parts = vec![self.package_manager.program.as_str()];
        parts.extend(self.package_manager.install_args.iter().map(String::as_str));
        parts.join(" ")
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.package_manager.program.trim().is_empty() {
            return Err(AppError::ConfigInvalid(
                "package_manager.program must not be empty".to_string(),
            ));
        }
        for subproject in Subproject::ALL {
            validate_relative_dir(subproject, &self.subproject(subproject).dir)?;
        }
        if self.backend.dir == self.frontend.dir {
            return Err(AppError::InvalidPath(format!(
                "backend and frontend share the directory '{}'",
                self.backend.dir.display()
            )));
        }
        Ok(())
    }
}

fn validate_relative_dir(subproject: Subproject, dir: &Path) -> Result<(), AppError> {
    if dir.as_os_str().is_empty() {
        return Err(AppError::InvalidPath(format!("{subproject}.dir must not be empty")));
    }
    let plain = dir.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !plain {
        return Err(AppError::InvalidPath(format!(
            "{subproject}.dir '{}' must be relative to the project root without '..'",
            dir.display()
        )));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SetupConfigDto {
    #[serde(default)]
    package_manager: PackageManagerDto,
    #[serde(default)]
    backend: SubprojectDto,
    #[serde(default)]
    frontend: SubprojectDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PackageManagerDto {
    program: Option<String>,
    install_args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubprojectDto {
    dir: Option<PathBuf>,
    start: Option<String>,
}

impl SubprojectDto {
    fn resolve(self, subproject: Subproject) -> SubprojectConfig {
        let defaults = SubprojectConfig::defaults_for(subproject);
        SubprojectConfig {
            dir: self.dir.unwrap_or(defaults.dir),
            start: self.start.unwrap_or(defaults.start),
        }
    }
}

/// Parse and validate `setup.toml` content, filling in defaults.
pub fn parse_setup_config(content: &str) -> Result<SetupConfig, AppError> {
    let dto: SetupConfigDto = toml::from_str(content)?;
    let defaults = PackageManagerConfig::default();

    let config = SetupConfig {
        package_manager: PackageManagerConfig {
            program: dto.package_manager.program.unwrap_or(defaults.program),
            install_args: dto.package_manager.install_args.unwrap_or(defaults.install_args),
        },
        backend: dto.backend.resolve(Subproject::Backend),
        frontend: dto.frontend.resolve(Subproject::Frontend),
    };
    config.validate()?;
    Ok(config)
}
