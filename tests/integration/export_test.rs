//! Integration tests for `abitrim export`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use abitrim::abi::parse_abi;

use crate::helpers::{abitrim, abitrim_with_config, fixture_arg, fixture_path, run_abitrim};

#[test]
fn export_without_flags_prints_everything() {
    let (stdout, _stderr, exit_code) = run_abitrim(&["export", &fixture_arg("erc20.json")]);

    assert_eq!(exit_code, 0);
    assert_eq!(parse_abi(&stdout).unwrap().len(), 13);
}

#[test]
fn export_selected_overloads() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("overloads.json"),
        "--format",
        "human",
        "--minify",
        "--select",
        "function-transfer(address,uint256,bool)",
        "--select",
        "function-transfer(address,uint256)",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"["function transfer(address to, uint256 amount) returns (bool)","function transfer(address to, uint256 amount, bool data) returns (bool)"]"#);
}

#[test]
fn export_unknown_key_fails() {
    let (stdout, stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("overloads.json"),
        "--select",
        "function-nope()",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown entry key(s): function-nope()"));
}

#[test]
fn export_exclude_drops_keys() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("overloads.json"),
        "--format",
        "human",
        "--minify",
        "--exclude",
        "fallback-()",
        "--exclude",
        "function-transfer(address,uint256)",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim_end(),
        r#"["function transfer(address to, uint256 amount, bool data) returns (bool)"]"#
    );
}

#[test]
fn export_type_filter_narrows_selection() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("erc20.json"),
        "--format",
        "human",
        "--type",
        "event",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    [
      "event Transfer(address indexed from, address indexed to, uint256 value)",
      "event Approval(address indexed owner, address indexed spender, uint256 value)"
    ]
    "#);
}

#[test]
fn export_filter_intersects_with_select() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("erc20.json"),
        "--format",
        "human",
        "--minify",
        "--select",
        "function-transfer(address,uint256)",
        "--select",
        "event-Transfer(address,address,uint256)",
        "--search",
        "transfer",
        "--type",
        "function",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim_end(),
        r#"["function transfer(address to, uint256 value) returns (bool)"]"#
    );
}

#[test]
fn export_trim() {
    let (stdout, _stderr, exit_code) = run_abitrim(&[
        "export",
        &fixture_arg("ownable_pausable.json"),
        "--trim",
    ]);

    assert_eq!(exit_code, 0);
    let keys: Vec<String> = parse_abi(&stdout)
        .unwrap()
        .iter()
        .map(|e| e.key().into_string())
        .collect();
    assert_eq!(keys, vec!["function-mint(address,uint256)", "event-Minted(address,uint256)"]);
}

#[test]
fn structural_export_round_trips_keys() {
    let selected = [
        "function-balanceOf(address)",
        "event-Approval(address,address,uint256)",
        "constructor-(uint256)",
    ];
    let mut args = vec!["export".to_string(), fixture_arg("erc20.json")];
    for key in selected {
        args.push("--select".to_string());
        args.push(key.to_string());
    }

    let output = abitrim().args(&args).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<String> = parse_abi(&stdout)
        .unwrap()
        .iter()
        .map(|e| e.key().into_string())
        .collect();
    // parsed order, not the order of the flags
    assert_eq!(
        keys,
        vec![
            "constructor-(uint256)",
            "function-balanceOf(address)",
            "event-Approval(address,address,uint256)",
        ]
    );
}

#[test]
fn json_and_human_outputs_differ() {
    let (json, _, _) = run_abitrim(&["export", &fixture_arg("overloads.json")]);
    let (human, _, _) = run_abitrim(&["export", &fixture_arg("overloads.json"), "-f", "human"]);
    assert!(!json.trim().is_empty());
    assert!(!human.trim().is_empty());
    assert_ne!(json, human);
}

#[test]
fn export_save_writes_to_configured_directory() {
    let out = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let config = config_dir.path().join("config.toml");
    fs::write(
        &config,
        format!("[export]\ndirectory = \"{}\"\n", out.path().display()),
    )
    .unwrap();

    abitrim_with_config(&config)
        .arg("export")
        .arg(fixture_path("overloads.json"))
        .args(["--save", "--format", "human", "--minify"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Saved"));

    let saved = fs::read_to_string(out.path().join("selected-abi.txt")).unwrap();
    assert!(saved.starts_with("[\"function transfer("));
    assert!(saved.ends_with("\"fallback() external\"]"));
}

#[test]
fn export_output_directory_gets_default_name() {
    let out = TempDir::new().unwrap();

    abitrim()
        .arg("export")
        .arg(fixture_path("overloads.json"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    let saved = fs::read_to_string(out.path().join("selected-abi.json")).unwrap();
    assert_eq!(parse_abi(&saved).unwrap().len(), 3);
}

#[test]
fn export_output_explicit_file() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("picked.json");

    abitrim()
        .arg("export")
        .arg(fixture_path("overloads.json"))
        .arg("-o")
        .arg(&target)
        .assert()
        .success();

    assert!(target.exists());
}

#[test]
fn export_into_missing_directory_fails() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("nope").join("picked.json");

    abitrim()
        .arg("export")
        .arg(fixture_path("overloads.json"))
        .arg("-o")
        .arg(&target)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Export directory does not exist"));
}

#[test]
fn export_json_keeps_entries_as_written() {
    let input = r#"[{"constant":true,"inputs":[{"type":"address"}],"name":"balanceOf","outputs":[{"name":"","type":"uint256"}],"payable":false,"stateMutability":"view","type":"function","gas":2400},{"inputs":[{"name":null,"type":"uint256"}],"name":"Nope","type":"error"}]"#;

    let output = abitrim()
        .args(["export", "--minify", "--select", "function-balanceOf(address)"])
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let exported: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first: serde_json::Value = serde_json::from_str::<serde_json::Value>(input).unwrap()[0].clone();
    assert_eq!(exported, serde_json::Value::Array(vec![first]));
}
