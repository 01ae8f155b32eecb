//! Integration tests for `.env` handling in the CLI.
//!
//! Invariants:
//! - Tests explicitly clear `DOTENV_DISABLED` to enable dotenv loading.
//! - Tests use temp directories and set current_dir to isolate `.env` file effects.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to clear all SPLUNK_* environment variables for test isolation.
fn clear_splunk_env(cmd: &mut assert_cmd::Command) {
    for (key, _) in std::env::vars() {
        if key.starts_with("SPLUNK_") {
            cmd.env_remove(&key);
        }
    }
}

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-args");
    cmd.current_dir(dir.path());
    clear_splunk_env(&mut cmd);
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}

#[test]
fn test_dotenv_supplies_job_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "SPLUNK_EARLIEST_TIME=-4h\n").unwrap();

    cmd_in(&temp_dir)
        .args(["--format", "form", "job", "search *"])
        .assert()
        .success()
        .stdout("search=search *\nearliest_time=-4h\n");
}

#[test]
fn test_invalid_dotenv_causes_failure_without_leaking() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "SPLUNK_NEW_USER_PASSWORD=hunter2\nINVALID LINE WITH secret-value\n",
    )
    .unwrap();

    cmd_in(&temp_dir)
        .arg("keys")
        .assert()
        .code(5)
        .stderr(predicate::str::contains(".env"))
        .stderr(predicate::str::contains("secret-value").not())
        .stderr(predicate::str::contains("hunter2").not());
}

#[test]
fn test_dotenv_disabled_skips_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID LINE").unwrap();

    cmd_in(&temp_dir)
        .env("DOTENV_DISABLED", "1")
        .arg("keys")
        .assert()
        .success();
}
