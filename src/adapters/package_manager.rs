use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, PackageManagerConfig};
use crate::ports::DependencyInstaller;

/// Runs the configured package manager as a child process with inherited stdio.
#[derive(Debug, Clone)]
pub struct PackageManagerInstaller {
    program: String,
    args: Vec<String>,
}

impl PackageManagerInstaller {
    pub fn new(config: &PackageManagerConfig) -> Self {
        Self { program: config.program.clone(), args: config.install_args.clone() }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(not(windows))]
    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    // npm, pnpm and yarn ship as .cmd shims on Windows, which only the shell resolves.
    #[cfg(windows)]
    fn command(&self) -> Command {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(&self.program).args(&self.args);
        command
    }
}

impl DependencyInstaller for PackageManagerInstaller {
    fn install(&self, dir: &Path) -> Result<(), AppError> {
        let command_line = self.command_line();
        debug!(command = %command_line, dir = %dir.display(), "spawning package manager");

        let status = self
            .command()
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::InstallFailed {
                program: command_line.clone(),
                dir: dir.to_path_buf(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::InstallFailed {
                program: command_line,
                dir: dir.to_path_buf(),
                details: status.to_string(),
            });
        }

        debug!(dir = %dir.display(), "package manager finished");
        Ok(())
    }
}
