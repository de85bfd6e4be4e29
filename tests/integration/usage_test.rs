//! Integration tests for top-level usage, completions and the select guard

use predicates::prelude::*;

use crate::helpers::{abitrim, fixture_arg, run_abitrim};

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_abitrim(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["list", "trim", "export", "select", "config", "completions"] {
        assert!(stdout.contains(command), "missing {}", command);
    }
}

#[test]
fn version_starts_with_package_version() {
    abitrim()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "abitrim ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let (_stdout, _stderr, exit_code) = run_abitrim(&[]);
    assert_eq!(exit_code, 2);
}

#[test]
fn out_of_range_indent_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_abitrim(&["trim", "--indent", "0"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--indent"));
}

#[test]
fn unknown_type_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_abitrim(&["list", "--type", "struct"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unknown entry type 'struct'"));
}

#[test]
fn completions_for_bash() {
    abitrim()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abitrim"));
}

#[test]
fn select_requires_a_terminal() {
    let (_stdout, stderr, exit_code) = run_abitrim(&["select", &fixture_arg("erc20.json")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("needs an interactive terminal"));
}

#[test]
fn select_requires_a_file() {
    let (_stdout, stderr, exit_code) = run_abitrim(&["select"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"));
}
