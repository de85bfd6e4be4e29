//! Integration tests for `abitrim config`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use abitrim::Config;

use crate::helpers::abitrim_with_config;

#[test]
fn config_path_follows_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");

    abitrim_with_config(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", config.display()));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    abitrim_with_config(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert_eq!(Config::load_from(&config).unwrap(), Config::default());
}

#[test]
fn config_init_keeps_existing_file_without_force() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[format]\nindentation = 4\n").unwrap();

    abitrim_with_config(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));

    assert_eq!(Config::load_from(&config).unwrap().format.indentation, 4);
}

#[test]
fn config_init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[format]\nindentation = 4\n").unwrap();

    abitrim_with_config(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    assert_eq!(Config::load_from(&config).unwrap().format.indentation, 2);
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[trim]\nextra_events = [\"Upgraded\"]\n").unwrap();

    abitrim_with_config(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("indentation = 2"))
        .stdout(predicate::str::contains("Upgraded"));
}
