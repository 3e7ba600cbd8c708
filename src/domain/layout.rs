//! Filesystem layout of a portal checkout.

use std::path::{Path, PathBuf};

use crate::domain::{SetupConfig, Subproject};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.env";
const CONFIG_TEMPLATE: &str = "config.env.example";
const UPLOADS_DIR: &str = "uploads";

/// Absolute paths the bootstrapper inspects, derived from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    backend: PathBuf,
    frontend: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, config: &SetupConfig) -> Self {
        Self {
            root: root.into(),
            backend: config.backend.dir.clone(),
            frontend: config.frontend.dir.clone(),
        }
    }

    pub fn subproject_dir(&self, subproject: Subproject) -> PathBuf {
        self.root.join(self.relative_dir(subproject))
    }

    /// Subproject directory as written in the configuration.
    pub fn relative_dir(&self, subproject: Subproject) -> &Path {
        match subproject {
            Subproject::Backend => &self.backend,
            Subproject::Frontend => &self.frontend,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(self.config_file_relative())
    }

    /// `backend/config/config.env`, relative to the root, for user-facing text.
    pub fn config_file_relative(&self) -> PathBuf {
        self.backend.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn config_template(&self) -> PathBuf {
        self.subproject_dir(Subproject::Backend).join(CONFIG_DIR).join(CONFIG_TEMPLATE)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.subproject_dir(Subproject::Backend).join(UPLOADS_DIR)
    }
}
