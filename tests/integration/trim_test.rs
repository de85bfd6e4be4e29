//! Integration tests for `abitrim trim`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use abitrim::abi::parse_abi;

use crate::helpers::{abitrim, abitrim_with_config, fixture_arg, fixture_path, run_abitrim};

#[test]
fn trim_removes_boilerplate() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "trim",
        &fixture_arg("ownable_pausable.json"),
        "--format",
        "human",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    [
      "function mint(address to, uint256 amount)",
      "event Minted(address indexed to, uint256 amount)"
    ]
    "#);
}

#[test]
fn trim_owner_and_paused_leaves_nothing() {
    abitrim()
        .args(["trim", "--minify"])
        .write_stdin(
            r#"[{"type":"function","name":"owner","inputs":[],"outputs":[{"type":"address"}],"stateMutability":"view"},
                {"type":"event","name":"Paused","inputs":[]}]"#,
        )
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn trim_keeps_order_and_fields() {
    let (stdout, _stderr, exit_code) =
        run_abitrim(&["trim", &fixture_arg("erc20.json"), "--minify"]);

    assert_eq!(exit_code, 0);
    let kept = parse_abi(&stdout).unwrap();
    assert_eq!(kept.len(), 12);
    let keys: Vec<String> = kept.iter().map(|e| e.key().into_string()).collect();
    assert_eq!(keys[0], "function-name()");
    assert_eq!(keys[11], "error-ERC20InsufficientBalance(address,uint256,uint256)");
    assert!(stdout.contains(r#""internalType":"uint256""#));
}

#[test]
fn trim_explain_lists_removed_entries() {
    let (_stdout, stderr, exit_code) = run_abitrim(&[
        "trim",
        &fixture_arg("ownable_pausable.json"),
        "--explain",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stderr.trim_end(), @r"
    removed constructor-() (constructor handler)
    removed receive-() (receive handler)
    removed function-owner() (ownership boilerplate)
    removed function-transferOwnership(address) (ownership boilerplate)
    removed function-renounceOwnership() (ownership boilerplate)
    removed function-pause() (pausability boilerplate)
    removed function-paused() (pausability boilerplate)
    removed function-MINTER_ROLE() (role constant (*_ROLE))
    removed event-OwnershipTransferred(address,address) (ownership boilerplate)
    removed event-Paused(address) (pausability boilerplate)
    ");
}

#[test]
fn trim_indent_flag() {
    abitrim()
        .args(["trim", "--format", "human", "--indent", "4"])
        .write_stdin(r#"[{"type":"error","name":"Nope","inputs":[]}]"#)
        .assert()
        .success()
        .stdout("[\n    \"error Nope()\"\n]\n");
}

#[test]
fn trim_uses_configured_extra_names() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[trim]\nextra_functions = [\"mint\"]\n").unwrap();

    abitrim_with_config(&config)
        .arg("trim")
        .arg(fixture_path("ownable_pausable.json"))
        .args(["--format", "human", "--minify"])
        .assert()
        .success()
        .stdout("[\"event Minted(address indexed to, uint256 amount)\"]\n");
}

#[test]
fn trim_reads_format_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[format]\nminified = true\n").unwrap();

    abitrim_with_config(&config)
        .args(["trim", "--format", "human"])
        .write_stdin(r#"[{"type":"event","name":"Ping","inputs":[]}]"#)
        .assert()
        .success()
        .stdout("[\"event Ping()\"]\n");
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[format]\nindentation = 12\n").unwrap();

    abitrim_with_config(&config)
        .arg("trim")
        .write_stdin("[]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 8"));
}
