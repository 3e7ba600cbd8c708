use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn backend_failure_is_reported_and_skips_frontend() {
    let ctx = TestContext::new();

    ctx.answer_with_missing_package_manager("y")
        .success()
        .stderr(predicate::str::contains("Error during dependency installation:"))
        .stderr(predicate::str::contains("portal-setup-missing-pm install"))
        .stdout(predicate::str::contains("Installing frontend dependencies").not())
        .stdout(predicate::str::contains("Setup complete!").not());
}

#[test]
fn failed_installation_still_prepares_files() {
    let ctx = TestContext::new();

    ctx.answer_with_missing_package_manager("yes").success();

    assert!(ctx.config_path().exists());
    assert!(ctx.uploads_path().is_dir());
}

#[cfg(unix)]
#[test]
fn successful_installation_prints_start_hints() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--package-manager", "true"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend dependencies installed!"))
        .stdout(predicate::str::contains("Frontend dependencies installed!"))
        .stdout(predicate::str::contains("Setup complete!"))
        .stdout(predicate::str::contains("To start the backend: cd backend && npm start"))
        .stdout(predicate::str::contains("To start the frontend: cd frontend && npm run dev"));
}
