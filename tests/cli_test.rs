// tests/cli_test.rs
mod common;

use assert_cmd::Command;
use common::{read, registry_body, setup_package_repo, Fixture};
use mockito::Server;
use predicates::prelude::*;

fn pubver() -> Command {
    let mut cmd = Command::cargo_bin("pubver").expect("binary should build");
    cmd.env_remove("PUBVER_REGISTRY_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    pubver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check-version"))
        .stdout(predicate::str::contains("is-latest-published"))
        .stdout(predicate::str::contains("prepare-next-version"));
}

#[test]
fn test_missing_input_directory_fails_validation() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    pubver()
        .args(["is-latest-published", "--input"])
        .arg(&missing)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_version_increment_is_mandatory() {
    let dir = setup_package_repo(&Fixture::consistent("1.0.0", "v1.0.0"));

    pubver()
        .args(["prepare-next-version", "--input"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--version-increment"));
}

#[test]
fn test_check_version_success() {
    let dir = setup_package_repo(&Fixture::consistent("0.5.0", "v0.5.0"));

    pubver()
        .args(["check-version", "--input"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version 0.5.0 is consistent"));
}

#[test]
fn test_check_version_failure_exit_code() {
    let dir = setup_package_repo(&Fixture {
        name: "my_package",
        manifest_version: Some("1.0.0"),
        changelog_version: Some("1.0.1"),
        tag: Some("v1.0.0"),
    });

    pubver()
        .args(["check-version", "--input"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "manifest=1.0.0, changelog=1.0.1, tag=1.0.0",
        ));
}

#[test]
fn test_is_latest_published_behind_via_registry_flag() {
    let dir = setup_package_repo(&Fixture::consistent("1.0.0", "v1.0.0"));
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/packages/my_package")
        .with_status(200)
        .with_body(registry_body("my_package", "1.0.2"))
        .create();
    let url = server.url();

    pubver()
        .args(["is-latest-published", "--registry-url", url.as_str(), "--input"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1.0.0").and(predicate::str::contains("1.0.2")));

    mock.assert();
}

#[test]
fn test_prepare_next_version_writes_manifest() {
    let dir = setup_package_repo(&Fixture::consistent("1.2.3", "v1.2.3"));
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/packages/my_package")
        .with_status(200)
        .with_body(registry_body("my_package", "1.2.3"))
        .create();

    pubver()
        .env("PUBVER_REGISTRY_URL", server.url())
        .args(["prepare-next-version", "--version-increment", "minor", "--input"])
        .arg(dir.path())
        .assert()
        .success();

    mock.assert();
    assert!(read(dir.path(), "pubspec.yaml").contains("version: 1.3.0"));
}
