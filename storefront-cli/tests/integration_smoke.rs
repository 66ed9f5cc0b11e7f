//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Request timeout in seconds"));
}

#[test]
fn test_migrate_creates_schema() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("storefront.db");

    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("migrate")
        .arg("--db-path")
        .arg(&db_path);

    cmd.assert().success();
    assert!(db_path.exists());
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
