// Copyright 2021-2023 Martin Pool

//! Tests for the factorial CLI layer.

use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;
use predicates::prelude::*;


lazy_static! {
    static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("factorial");
}

fn run() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    // Strip any options configured in the environment running these tests.
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("FACTORIAL_") || k == "CLICOLOR_FORCE")
        .for_each(|k| {
            cmd.env_remove(k);
        });
    cmd
}

#[test]
fn computes_but_prints_only_prompt_and_blank_line() {
    run()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout("Enter a number: \n\n")
        .stderr("");
}

#[test]
fn input_without_trailing_newline() {
    run()
        .write_stdin("5")
        .assert()
        .success()
        .stdout("Enter a number: \n\n");
}

#[test]
fn negative_number_succeeds() {
    run()
        .write_stdin("-3\n")
        .assert()
        .success()
        .stdout("Enter a number: \n\n");
}

#[test]
fn huge_number_does_not_panic() {
    run()
        .arg("--show-result")
        .write_stdin("2147483647\n")
        .assert()
        .success()
        .stdout("Enter a number: \n0\n\n");
}

#[test]
fn show_result_prints_value() {
    run()
        .arg("--show-result")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout("Enter a number: \n120\n\n");
}

#[test]
fn overflow_wraps_silently() {
    run()
        .arg("-s")
        .write_stdin("21\n")
        .assert()
        .success()
        .stdout("Enter a number: \n-4249290049419214848\n\n");
}

#[test]
fn empty_input_fails() {
    run()
        .write_stdin("")
        .assert()
        .code(2)
        .stdout("Enter a number: \n")
        .stderr(predicate::str::contains("end of input"));
}

#[test]
fn invalid_number_fails() {
    run()
        .write_stdin("abc\n")
        .assert()
        .code(3)
        .stdout("Enter a number: \n")
        .stderr(predicate::str::contains(r#"invalid number format: "abc""#));
}

#[test]
fn invalid_utf8_is_an_invalid_number() {
    run()
        .write_stdin(&b"5\xff\n"[..])
        .assert()
        .code(3)
        .stdout("Enter a number: \n")
        .stderr(predicate::str::contains("invalid number format"));
}

#[test]
fn blank_line_is_an_invalid_number() {
    run().write_stdin("\n").assert().code(3);
}

#[test]
fn surrounding_whitespace_is_an_invalid_number() {
    run().write_stdin(" 5\n").assert().code(3);
}

#[test]
fn show_version() {
    run()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"^factorial \d+\.\d+\.\d+(-.*)?\n$").unwrap());
}

#[test]
fn show_help() {
    run()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--show-result"));
}

#[test]
fn unknown_option_is_usage_error() {
    run().arg("--wibble").assert().code(1).stdout("");
}

#[test]
fn generate_completions() {
    run()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial"));
}
