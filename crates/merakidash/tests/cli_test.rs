//! Integration tests for the `merakidash` binary.
//!
//! Only paths that exit on their own are exercised: help, version, and
//! configuration errors raised before the listener is bound.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Build a [`Command`] for the `merakidash` binary with env isolation.
///
/// Clears `MERAKI_*` variables, runs in an empty temp dir (so no `.env` is
/// picked up), and points the config file at a path that doesn't exist.
fn merakidash_cmd(workdir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("merakidash");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir)
        .env_remove("MERAKI_API_KEY")
        .env_remove("MERAKI_BASE_URL")
        .env_remove("MERAKI_BIND")
        .env_remove("MERAKI_TIMEOUT")
        .env_remove("MERAKI_CLIENT_TIMESPAN")
        .env_remove("MERAKIDASH_BIND")
        .env_remove("RUST_LOG")
        .args(["--config", "missing.toml"]);
    cmd
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    merakidash_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Meraki")
                .and(predicate::str::contains("--bind"))
                .and(predicate::str::contains("--config")),
        );
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    merakidash_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("merakidash "));
}

#[test]
fn test_invalid_bind_address_fails_before_serving() {
    let dir = tempfile::tempdir().unwrap();
    merakidash_cmd(dir.path())
        .args(["--bind", "not-an-address"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_invalid_timeout_from_env_fails() {
    let dir = tempfile::tempdir().unwrap();
    merakidash_cmd(dir.path())
        .env("MERAKI_TIMEOUT", "0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_port_in_use_reports_bind_error_and_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    merakidash_cmd(dir.path())
        .args(["--bind", addr.as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MERAKI_API_KEY environment variable not set"))
        .stderr(predicate::str::contains(format!("Could not listen on {addr}")));
}
