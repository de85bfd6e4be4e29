//! Integration tests for `abitrim list`

use predicates::prelude::*;

use crate::helpers::{abitrim, fixture_arg, load_fixture, run_abitrim};

#[test]
fn list_prints_one_key_per_entry() {
    let (stdout, stderr, exit_code) = run_abitrim(&["list", &fixture_arg("erc20.json")]);

    assert_eq!(exit_code, 0);
    let keys: Vec<&str> = stdout.lines().collect();
    assert_eq!(keys.len(), 13);
    assert_eq!(keys[0], "constructor-(uint256)");
    assert!(keys.contains(&"function-transferFrom(address,address,uint256)"));
    assert!(keys.contains(&"error-ERC20InsufficientBalance(address,uint256,uint256)"));
    assert_eq!(
        stderr.trim_end(),
        "9 functions, 2 events, 1 constructor, 1 error"
    );
}

#[test]
fn list_type_filter() {
    let (stdout, _stderr, exit_code) =
        run_abitrim(&["list", &fixture_arg("erc20.json"), "--type", "event"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    event-Transfer(address,address,uint256)
    event-Approval(address,address,uint256)
    ");
}

#[test]
fn list_search_is_case_insensitive_over_name_and_key() {
    let (stdout, _stderr, exit_code) =
        run_abitrim(&["list", &fixture_arg("erc20.json"), "-s", "TRANSFER"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    function-transfer(address,uint256)
    function-transferFrom(address,address,uint256)
    event-Transfer(address,address,uint256)
    ");
}

#[test]
fn list_search_matches_parameter_types_in_key() {
    let (stdout, _stderr, _) = run_abitrim(&["list", &fixture_arg("overloads.json"), "-s", "bool"]);
    assert_eq!(stdout.trim_end(), "function-transfer(address,uint256,bool)");
}

#[test]
fn list_overloads_get_distinct_keys() {
    let (stdout, _stderr, exit_code) = run_abitrim(&["list", &fixture_arg("overloads.json")]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    function-transfer(address,uint256)
    function-transfer(address,uint256,bool)
    fallback-()
    ");
}

#[test]
fn list_long_shows_details() {
    let (stdout, _stderr, exit_code) =
        run_abitrim(&["list", &fixture_arg("overloads.json"), "--long"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("    FUNCTION transfer [nonpayable]"));
    assert!(stdout.contains("    Inputs: to: address, amount: uint256, data: bool"));
    assert!(stdout.contains("    Outputs: : bool"));
    assert!(stdout.contains("    FALLBACK [nonpayable]"));
}

#[test]
fn list_reads_stdin() {
    abitrim()
        .arg("list")
        .write_stdin(load_fixture("overloads.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("fallback-()"));
}

#[test]
fn list_dash_reads_stdin() {
    abitrim()
        .args(["list", "-"])
        .write_stdin(r#"[{"type":"receive","stateMutability":"payable"}]"#)
        .assert()
        .success()
        .stdout("receive-()\n");
}

#[test]
fn malformed_input_is_a_runtime_error() {
    let (stdout, stderr, exit_code) = run_abitrim(&["list", &fixture_arg("malformed.json")]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: Invalid ABI format"));
}

#[test]
fn non_array_input_is_rejected() {
    abitrim()
        .arg("list")
        .write_stdin(r#"{"type":"function"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid ABI format"));
}

#[test]
fn missing_file_names_the_path() {
    let (_stdout, stderr, exit_code) = run_abitrim(&["list", "does-not-exist.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read does-not-exist.json"));
}

#[test]
fn empty_abi_lists_nothing() {
    abitrim()
        .arg("list")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("")
        .stderr("No selected ABI items\n");
}
