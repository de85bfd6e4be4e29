//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// abitrim with colours off, logging unset and a config path that does not
/// exist, so the user's own config never leaks into a test.
pub fn abitrim() -> Command {
    abitrim_with_config(&fixtures_dir().join("missing").join("config.toml"))
}

/// abitrim reading its config from `config`.
pub fn abitrim_with_config(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("abitrim").expect("abitrim binary is built");
    cmd.env("NO_COLOR", "1")
        .env("ABITRIM_CONFIG", config)
        .env_remove("ABITRIM_LOG");
    cmd
}

/// Run abitrim and capture (stdout, stderr, exit code).
pub fn run_abitrim(args: &[&str]) -> (String, String, i32) {
    let output = abitrim()
        .args(args)
        .output()
        .expect("Failed to execute abitrim");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Fixture path as a string argument.
pub fn fixture_arg(name: &str) -> String {
    fixture_path(name).display().to_string()
}
