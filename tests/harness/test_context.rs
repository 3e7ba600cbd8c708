//! Shared testing harness for `portal-setup` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const CONFIG_TEMPLATE: &str =
    "NODE_ENV=development\nPORT=5000\nMONGO_URI=mongodb://localhost:27017/jobportal\n";

/// Isolated portal checkout with `backend/` and `frontend/` subprojects.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a checkout with a config template and both package manifests.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("backend/config").create_dir_all().expect("Failed to create backend/config");
        root.child("frontend").create_dir_all().expect("Failed to create frontend");
        root.child("backend/config/config.env.example")
            .write_str(CONFIG_TEMPLATE)
            .expect("Failed to write config template");
        root.child("backend/package.json")
            .write_str("{\"name\": \"backend\"}\n")
            .expect("Failed to write backend manifest");
        root.child("frontend/package.json")
            .write_str("{\"name\": \"frontend\"}\n")
            .expect("Failed to write frontend manifest");
        Self { root }
    }

    /// Create an empty directory with no subprojects.
    pub(crate) fn empty() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.path().join("backend/config/config.env")
    }

    pub(crate) fn uploads_path(&self) -> PathBuf {
        self.root.path().join("backend/uploads")
    }

    pub(crate) fn write_setup_toml(&self, content: &str) {
        fs::write(self.root.path().join("setup.toml"), content).expect("Failed to write setup.toml");
    }

    /// Build a command for the compiled binary, run from the checkout root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("portal-setup").expect("Failed to locate portal-setup binary");
        cmd.current_dir(self.root.path()).env_remove("PORTAL_SETUP_LOG").env("NO_COLOR", "1");
        cmd
    }

    /// Run the binary answering `answer` to the consent question.
    pub(crate) fn answer(&self, answer: &str) -> assert_cmd::assert::Assert {
        self.cli().write_stdin(format!("{answer}\n")).assert()
    }

    /// Run the binary with a package manager that cannot be spawned.
    pub(crate) fn answer_with_missing_package_manager(
        &self,
        answer: &str,
    ) -> assert_cmd::assert::Assert {
        self.cli()
            .args(["--package-manager", "portal-setup-missing-pm"])
            .write_stdin(format!("{answer}\n"))
            .assert()
    }
}
