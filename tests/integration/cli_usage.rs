//! Integration tests for the command-line surface
//!
//! Usage errors must be reported before any cluster access, so none of these
//! tests need a reachable API server.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command isolated from the user's home, config and kubeconfig
fn kn_export(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kn-export").expect("binary should build");
    cmd.env("HOME", dir.path())
        .env("KUBECONFIG", dir.path().join("missing-kubeconfig"))
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_requires_service_name() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir)
        .args(["-o", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'kn service export' requires name of the service as single argument",
        ));
}

#[test]
fn test_rejects_multiple_names() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir)
        .args(["foo", "bar", "-o", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires name of the service"));
}

#[test]
fn test_requires_output_format() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir)
        .arg("foo")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'kn service export' requires output format",
        ));
}

#[test]
fn test_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir)
        .args(["foo", "-o", "yaml", "--mode", "snapshot"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("snapshot"));
}

#[test]
fn test_help_lists_examples() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--with-revisions"))
        .stdout(predicate::str::contains("--mode=replay"));
}

#[test]
fn test_logs_go_to_data_dir() {
    let dir = TempDir::new().unwrap();
    kn_export(&dir).arg("foo").assert().failure();

    assert!(dir
        .path()
        .join("data")
        .join("logs")
        .join("kn-export.log")
        .exists());
}
