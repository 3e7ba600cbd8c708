//! Bootstrap command implementation.
//!
//! Prepares a fresh checkout for first run: seeds `config.env` from its
//! template, creates the uploads directory, then asks once whether to install
//! dependencies for the backend and frontend.

use std::fs;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{
    AppError, BootstrapReport, ConfigFileStatus, Consent, InstallOutcome, Subproject,
    UploadsStatus,
};
use crate::ports::{ConsentPrompt, DependencyInstaller, StatusLevel, StatusReporter};

pub const INSTALL_QUESTION: &str = "❓ Do you want to install dependencies now? (y/n): ";

/// Execute the bootstrap.
///
/// The prompt handle is consumed and released before returning, on every
/// path. Installation failures are reported and recorded in the returned
/// report; only filesystem and prompt failures are returned as errors.
pub fn execute<I, R, P>(
    ctx: &mut AppContext<I, R>,
    mut prompt: P,
) -> Result<BootstrapReport, AppError>
where
    I: DependencyInstaller,
    R: StatusReporter,
    P: ConsentPrompt,
{
    print_banner(ctx.reporter());

    let config = ensure_config_file(ctx)?;
    debug!(?config, "config file checked");

    let uploads = ensure_uploads_dir(ctx)?;
    debug!(?uploads, "uploads directory checked");

    let consent = ask_consent(ctx, &mut prompt)?;
    debug!(?consent, "consent received");

    let install = if consent.is_affirmative() {
        install_dependencies(ctx)
    } else {
        print_manual_instructions(ctx);
        InstallOutcome::Skipped
    };
    drop(prompt);
    debug!(?install, "bootstrap done");

    Ok(BootstrapReport { config, uploads, consent, install })
}

fn print_banner<R: StatusReporter>(reporter: &mut R) {
    reporter.report(StatusLevel::Notice, "🚀 Job Portal Setup Script");
    reporter.report(
        StatusLevel::Warning,
        "This script will set up your job portal project environment",
    );
    reporter.report(StatusLevel::Plain, &"-".repeat(59));
    reporter.blank_line();
}

/// Copy `config.env.example` to `config.env` unless the target already exists.
fn ensure_config_file<I, R>(ctx: &mut AppContext<I, R>) -> Result<ConfigFileStatus, AppError>
where
    I: DependencyInstaller,
    R: StatusReporter,
{
    let target = ctx.layout().config_file();
    if target.exists() {
        return Ok(ConfigFileStatus::AlreadyPresent);
    }

    let template = ctx.layout().config_template();
    if !template.exists() {
        debug!(template = %template.display(), "no config template, skipping");
        return Ok(ConfigFileStatus::TemplateMissing);
    }

    ctx.reporter().report(StatusLevel::Plain, "⚙️  Creating config.env from example...");
    fs::copy(&template, &target)?;
    ctx.reporter().report(
        StatusLevel::Success,
        "✅ config.env created! Please edit it with your own values.",
    );
    Ok(ConfigFileStatus::Created)
}

fn ensure_uploads_dir<I, R>(ctx: &mut AppContext<I, R>) -> Result<UploadsStatus, AppError>
where
    I: DependencyInstaller,
    R: StatusReporter,
{
    let uploads = ctx.layout().uploads_dir();
    if uploads.exists() {
        return Ok(UploadsStatus::AlreadyPresent);
    }

    ctx.reporter().report(StatusLevel::Plain, "📁 Creating uploads directory...");
    fs::create_dir_all(&uploads)?;
    ctx.reporter().report(StatusLevel::Success, "✅ uploads directory created!");
    Ok(UploadsStatus::Created)
}

fn ask_consent<I, R, P>(ctx: &mut AppContext<I, R>, prompt: &mut P) -> Result<Consent, AppError>
where
    I: DependencyInstaller,
    R: StatusReporter,
    P: ConsentPrompt,
{
    let reminder = format!(
        "⚠️  Remember to set your MongoDB URI in {}",
        ctx.layout().config_file_relative().display()
    );
    ctx.reporter().blank_line();
    ctx.reporter().report(StatusLevel::Warning, &reminder);
    ctx.reporter().blank_line();

    let answer = prompt.read_line(INSTALL_QUESTION)?;
    Ok(Consent::parse(&answer))
}

/// Install backend then frontend. The first failure ends the sequence.
fn install_dependencies<I, R>(ctx: &mut AppContext<I, R>) -> InstallOutcome
where
    I: DependencyInstaller,
    R: StatusReporter,
{
    for subproject in Subproject::ALL {
        ctx.reporter().blank_line();
        ctx.reporter()
            .report(StatusLevel::Plain, &format!("📦 Installing {subproject} dependencies..."));

        let dir = ctx.layout().subproject_dir(subproject);
        if let Err(err) = ctx.installer().install(&dir) {
            debug!(%subproject, error = %err, "dependency installation failed");
            ctx.reporter().report(
                StatusLevel::Error,
                &format!("❌ Error during dependency installation: {err}"),
            );
            return InstallOutcome::Failed { subproject, message: err.to_string() };
        }

        ctx.reporter().report(
            StatusLevel::Success,
            &format!("✅ {} dependencies installed!", subproject.title()),
        );
    }

    ctx.reporter().blank_line();
    ctx.reporter().report(StatusLevel::Notice, "🎉 Setup complete!");
    for subproject in Subproject::ALL {
        let hint = format!(
            "📝 To start the {subproject}: cd {} && {}",
            ctx.layout().relative_dir(subproject).display(),
            ctx.config().subproject(subproject).start
        );
        ctx.reporter().report(StatusLevel::Notice, &hint);
    }

    InstallOutcome::Completed
}

fn print_manual_instructions<I, R>(ctx: &mut AppContext<I, R>)
where
    I: DependencyInstaller,
    R: StatusReporter,
{
    let install = ctx.config().install_command();
    let steps: Vec<String> = Subproject::ALL
        .iter()
        .enumerate()
        .map(|(i, subproject)| {
            format!(
                "  {}. cd {} && {install}",
                i + 1,
                ctx.layout().relative_dir(*subproject).display()
            )
        })
        .collect();

    ctx.reporter().blank_line();
    ctx.reporter().report(StatusLevel::Notice, "📝 To install dependencies manually:");
    for step in &steps {
        ctx.reporter().report(StatusLevel::Notice, step);
    }
}
