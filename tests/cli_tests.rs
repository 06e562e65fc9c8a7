//! CLI integration tests using the REAL scriptdock binary

mod common;

use common::scriptdock_bin;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    scriptdock_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog of shell scripts"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_install_help_lists_flags() {
    scriptdock_bin()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--source-root"));
}

#[test]
fn test_version_output() {
    scriptdock_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptdock"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    scriptdock_bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptdock"));
}

#[test]
fn test_completions_unknown_shell() {
    scriptdock_bin()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_unknown_command_fails() {
    scriptdock_bin().arg("frobnicate").assert().failure();
}
