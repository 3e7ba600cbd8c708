use std::path::Path;

use crate::domain::AppError;

/// Port for installing a subproject's dependencies.
pub trait DependencyInstaller {
    /// Install dependencies with `dir` as the working directory.
    ///
    /// Blocks until the installation finishes.
    fn install(&self, dir: &Path) -> Result<(), AppError>;
}
