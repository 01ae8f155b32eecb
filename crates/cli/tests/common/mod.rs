//! Shared test utilities for splunk-args integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No `.env` file and no host `SPLUNK_*` variable reaches the binary.

use assert_cmd::Command;

/// Returns a hermetic `splunk-args` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every `SPLUNK_*` variable from the host is cleared.
pub fn splunk_args_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-args");

    cmd.env("DOTENV_DISABLED", "1");

    for (key, _) in std::env::vars() {
        if key.starts_with("SPLUNK_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}
