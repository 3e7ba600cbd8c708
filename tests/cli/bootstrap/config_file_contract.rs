use crate::harness::TestContext;
use crate::harness::test_context::CONFIG_TEMPLATE;
use predicates::prelude::*;
use std::fs;

#[test]
fn creates_config_from_template() {
    let ctx = TestContext::new();

    ctx.answer("n").success().stdout(predicate::str::contains("config.env created!"));

    assert_eq!(fs::read_to_string(ctx.config_path()).unwrap(), CONFIG_TEMPLATE);
}

#[test]
fn rerun_preserves_edited_config() {
    let ctx = TestContext::new();
    ctx.answer("n").success();
    fs::write(ctx.config_path(), "MONGO_URI=mongodb+srv://cluster/prod\n").unwrap();

    ctx.answer("n").success().stdout(predicate::str::contains("Creating config.env").not());

    assert_eq!(
        fs::read_to_string(ctx.config_path()).unwrap(),
        "MONGO_URI=mongodb+srv://cluster/prod\n"
    );
}

#[test]
fn missing_template_is_silently_accepted() {
    let ctx = TestContext::empty();

    ctx.answer("n").success().stderr(predicate::str::is_empty());

    assert!(!ctx.config_path().exists());
}

#[test]
fn reminds_to_set_database_uri() {
    let ctx = TestContext::new();

    ctx.answer("n").success().stdout(predicate::str::contains(
        "Remember to set your MongoDB URI in backend/config/config.env",
    ));
}
