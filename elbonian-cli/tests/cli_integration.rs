//! Integration tests for the elbonian CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn elbonian() -> Command {
    let mut cmd = Command::cargo_bin("elbonian").unwrap();
    cmd.env_remove("ELBONIAN_CONFIG");
    cmd
}

#[test]
fn test_convert_elbonian_to_arabic() {
    elbonian()
        .arg("convert")
        .arg("MCXXI")
        .assert()
        .success()
        .stdout("1121\n");
}

#[test]
fn test_convert_arabic_to_elbonian() {
    elbonian()
        .args(["convert", "1121"])
        .assert()
        .success()
        .stdout("MCXXI\n");
}

#[test]
fn test_convert_reads_stdin() {
    elbonian()
        .arg("convert")
        .write_stdin(" MCXXI \n")
        .assert()
        .success()
        .stdout("1121\n");
}

#[test]
fn test_convert_empty_stdin_fails() {
    elbonian()
        .arg("convert")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input"));
}

#[test]
fn test_malformed_input_fails() {
    elbonian()
        .args(["convert", "CM"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("descending order"));
}

#[test]
fn test_out_of_bounds_fails() {
    elbonian()
        .args(["convert", "4998"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn test_unencodable_fails() {
    elbonian()
        .args(["convert", "3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Elbonian form"));
}

#[test]
fn test_json_output() {
    elbonian()
        .args(["convert", "KJ", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"arabic\": 8"))
        .stdout(predicate::str::contains("\"converted\": \"8\""));
}

#[test]
fn test_config_file() {
    elbonian()
        .args(["--config", &fixture_path("json-output.toml"), "convert", "KJ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"converted\":\"KJ\""));
}

#[test]
fn test_flags_override_config() {
    elbonian()
        .args(["convert", "KJ", "-t", "arabic", "-f", "text"])
        .arg("--config")
        .arg(fixture_path("json-output.toml"))
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    elbonian()
        .arg("--config")
        .arg(&config)
        .args(["convert", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file() {
    elbonian()
        .args(["--config", "nonexistent.toml", "convert", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_validate_ok() {
    elbonian()
        .args(["validate", "MCXXI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid Elbonian numeral (1121)"));
}

#[test]
fn test_validate_rejects_embedded_whitespace() {
    elbonian()
        .args(["validate", "MC XXI"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("whitespace"));
}

#[test]
fn test_list_symbols() {
    elbonian()
        .args(["list", "symbols"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000"))
        .stdout(predicate::str::contains("limits I to 1"));
}

#[test]
fn test_list_ranges() {
    elbonian()
        .args(["list", "ranges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1..=4997"));
}

#[test]
fn test_help() {
    elbonian()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_validate_json_rejection() {
    elbonian()
        .args(["validate", "DCC", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn test_convert_thirty_uses_y() {
    elbonian()
        .args(["convert", "1131"])
        .assert()
        .success()
        .stdout("MCYI\n");
}
