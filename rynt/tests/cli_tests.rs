//! End-to-end tests for the rynt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn rynt() -> Command {
    Command::cargo_bin("rynt").unwrap()
}

fn write_source(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".ryn").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_help() {
    rynt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tooling for the Ryn language"));
}

#[test]
fn test_version() {
    rynt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rynt"));
}

#[test]
fn test_tokens_plain_output() {
    let file = write_source("var x: i32? = null;\n");
    rynt()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYWORD `var`"))
        .stdout(predicate::str::contains("NULLABLE_TYPE `i32?`"))
        .stdout(predicate::str::contains("END_OF_FILE"));
}

#[test]
fn test_tokens_json_output() {
    let file = write_source("var x;\n");
    let output = rynt()
        .arg("tokens")
        .arg(file.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records[0]["kind"], "KEYWORD");
    assert_eq!(records[0]["lexeme"], "var");
}

#[test]
fn test_tokens_lex_error_fails() {
    let file = write_source("var x = $;\n");
    rynt()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lexical error"));
}

#[test]
fn test_tokens_missing_file() {
    rynt()
        .arg("tokens")
        .arg("/no/such/file.ryn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_check_clean_file() {
    let file = write_source("function main() -> i32 { return 0; }\n");
    rynt().arg("check").arg(file.path()).assert().success();
}

#[test]
fn test_check_failing_file() {
    let file = write_source("var x: i32 = ;\n");
    rynt()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_check_prints_diagnostics() {
    let file = write_source("var x = $;\n");
    rynt()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E1001]"));
}

#[test]
fn test_check_multiple_files() {
    let good = write_source("var a: i32;\n");
    let bad = write_source("class Foo {}\n");
    rynt()
        .arg("check")
        .arg(good.path())
        .arg(bad.path())
        .assert()
        .failure();
}

#[test]
fn test_check_requires_files() {
    rynt().arg("check").assert().failure();
}

#[test]
fn test_init_creates_project() {
    let temp_dir = TempDir::new().unwrap();
    rynt()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("rynt.toml").is_file());
    assert!(temp_dir.path().join("src").join("main.ryn").is_file());
    assert!(temp_dir.path().join("build").is_dir());
}

#[test]
fn test_init_then_check_starter() {
    let temp_dir = TempDir::new().unwrap();
    rynt()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    rynt()
        .arg("check")
        .arg(temp_dir.path().join("src").join("main.ryn"))
        .assert()
        .success();
}

#[test]
fn test_init_nonempty_without_force_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("leftover.txt"), "x").unwrap();

    rynt()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));
}

#[test]
fn test_init_with_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("proj");

    rynt()
        .arg("init")
        .arg("--path")
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("rynt.toml").is_file());
}
