use crate::domain::{ProjectLayout, SetupConfig};
use crate::ports::{DependencyInstaller, StatusReporter};

/// Application context holding dependencies for command execution.
pub struct AppContext<I: DependencyInstaller, R: StatusReporter> {
    config: SetupConfig,
    layout: ProjectLayout,
    installer: I,
    reporter: R,
}

impl<I: DependencyInstaller, R: StatusReporter> AppContext<I, R> {
    /// Create a new application context.
    pub fn new(config: SetupConfig, layout: ProjectLayout, installer: I, reporter: R) -> Self {
        Self { config, layout, installer, reporter }
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn reporter(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Give the reporter back, e.g. to inspect recorded output.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
