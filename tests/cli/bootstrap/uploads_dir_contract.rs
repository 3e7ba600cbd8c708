use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn creates_uploads_directory() {
    let ctx = TestContext::new();

    ctx.answer("n").success().stdout(predicate::str::contains("uploads directory created!"));

    assert!(ctx.uploads_path().is_dir());
}

#[test]
fn existing_uploads_directory_is_kept() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.uploads_path()).unwrap();
    fs::write(ctx.uploads_path().join("resume.pdf"), b"%PDF-1.4").unwrap();

    ctx.answer("n")
        .success()
        .stdout(predicate::str::contains("Creating uploads directory").not());

    assert!(ctx.uploads_path().join("resume.pdf").exists());
}
