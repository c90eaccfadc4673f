//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;

/// Get path to compiled binary
fn tfectl_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("tfectl")
}

/// Binary with no ambient address, token or organization
fn tfectl() -> Command {
    let mut cmd = Command::new(tfectl_bin());
    for var in [
        "TFE_ADDRESS",
        "TFE_HOSTNAME",
        "TFE_TOKEN",
        "TFC_TOKEN",
        "HCP_TOKEN",
        "TFE_ORGANIZATION",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    tfectl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-per-operation CLI"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    tfectl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tfectl"));
}

/// Test that running without a command lists root namespaces
#[test]
fn test_no_args_lists_commands() {
    tfectl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("workspace"))
        .stdout(predicate::str::contains("registry"));
}

/// Test that an unknown command fails with the command listing
#[test]
fn test_unknown_command_fails() {
    tfectl()
        .args(["frobnicate", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown command 'frobnicate'"))
        .stderr(predicate::str::contains("Commands:"));
}

/// Test that a legacy flat name fails with a hint towards the new namespace
#[test]
fn test_legacy_name_gets_hint() {
    tfectl()
        .args(["teamaccess", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'teamaccess' is now 'tfectl team access'"));
}

/// Test that a namespace stub prints its subcommands
#[test]
fn test_namespace_stub_prints_help() {
    tfectl()
        .args(["team", "access"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tfectl team access <subcommand>"))
        .stdout(predicate::str::contains("create"));
}

/// Test that an unknown subcommand under a namespace fails
#[test]
fn test_unknown_subcommand_fails() {
    tfectl()
        .args(["team", "access", "frobnicate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown subcommand 'frobnicate'"));
}

/// Test that command help lists its flags
#[test]
fn test_command_help() {
    tfectl()
        .args(["team", "list", "-help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tfectl team list"))
        .stdout(predicate::str::contains("--organization"))
        .stdout(predicate::str::contains("--page-size"));
}

/// Test that a missing required flag names the flag and exits 1
#[test]
fn test_missing_required_flag() {
    tfectl()
        .args(["--batch", "team", "read"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--id"));
}

/// Test that an invalid enum value is rejected before any request
#[test]
fn test_invalid_output_format() {
    tfectl()
        .args(["--batch", "team", "read", "-id", "team-1", "-output", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("xml"));
}

/// Test that docs writes one page per command plus an index
#[test]
fn test_docs_writes_pages() {
    let dir = tempfile::tempdir().unwrap();
    tfectl()
        .args(["docs", "-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert!(dir.path().join("index.md").exists());
    assert!(dir.path().join("teamaccess_create.md").exists());
    assert!(dir.path().join("agentpool_token_list.md").exists());
}
