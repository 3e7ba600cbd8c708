//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, SetupOptions};
use crate::app::logging;
use crate::domain::{AppError, InstallOutcome};

#[derive(Parser)]
#[command(name = "portal-setup")]
#[command(version)]
#[command(
    about = "Prepare a job portal checkout for first run",
    long_about = "Creates backend/config/config.env from its example, creates backend/uploads/, \
                  and optionally installs backend and frontend dependencies."
)]
struct Cli {
    /// Project root containing the backend and frontend directories (defaults to current directory)
    #[arg(short, long, value_name = "PATH")]
    root: Option<PathBuf>,
    /// Package manager used for installation (overrides setup.toml)
    #[arg(short, long, value_name = "PROGRAM")]
    package_manager: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_tracing();

    if let Err(e) = run_setup(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_setup(cli: Cli) -> Result<(), AppError> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let options = SetupOptions { root, package_manager: cli.package_manager };

    let report = api::setup(&options)?;
    // Installation failures were already reported and do not change the exit code.
    if let InstallOutcome::Failed { subproject, .. } = &report.install {
        tracing::debug!(%subproject, "setup finished with a failed installation");
    }
    Ok(())
}
