//! Library entry points wiring the real adapters.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::{PackageManagerInstaller, TerminalPrompt, TerminalReporter};
use crate::app::config::{ConfigOverrides, load_setup_config};
use crate::app::{AppContext, commands::bootstrap};
use crate::domain::{AppError, BootstrapReport, ProjectLayout};
use crate::ports::ConsentPrompt;

/// Options for a bootstrap run.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Project root containing the backend and frontend subprojects.
    pub root: PathBuf,
    /// Replaces `package_manager.program` from `setup.toml`.
    pub package_manager: Option<String>,
}

impl SetupOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), package_manager: None }
    }
}

/// Bootstrap the project, asking for consent on the terminal.
pub fn setup(options: &SetupOptions) -> Result<BootstrapReport, AppError> {
    setup_with_prompt(options, TerminalPrompt::new())
}

/// Bootstrap the project using the given consent channel.
///
/// The prompt is released before this returns.
pub fn setup_with_prompt<P: ConsentPrompt>(
    options: &SetupOptions,
    prompt: P,
) -> Result<BootstrapReport, AppError> {
    ensure_root(&options.root)?;

    let overrides = ConfigOverrides { package_manager: options.package_manager.clone() };
    let config = load_setup_config(&options.root, &overrides)?;
    let layout = ProjectLayout::new(&options.root, &config);
    let installer = PackageManagerInstaller::new(&config.package_manager);
    info!(root = %options.root.display(), install = %config.install_command(), "starting setup");

    let mut ctx = AppContext::new(config, layout, installer, TerminalReporter::stdio());
    bootstrap::execute(&mut ctx, prompt)
}

fn ensure_root(root: &Path) -> Result<(), AppError> {
    if !root.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "project root '{}' is not a directory",
            root.display()
        )));
    }
    Ok(())
}
