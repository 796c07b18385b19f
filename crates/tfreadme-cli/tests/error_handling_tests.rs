//! Tests for error handling, exit codes, and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn tfreadme(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("tfreadme");
    cmd.current_dir(dir)
        .env_remove("TFREADME_VARIABLES")
        .env_remove("TFREADME_OUTPUTS")
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}

#[test]
fn missing_variables_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    tfreadme(temp.path())
        .arg("generate")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("variables.tf"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn syntax_error_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("variables.tf"), "variable \"x\" {\n").unwrap();
    fs::write(temp.path().join("outputs.tf"), "").unwrap();

    tfreadme(temp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn malformed_block_shape_names_the_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("variables.tf.json"),
        r#"{"variable": "not an object"}"#,
    )
    .unwrap();
    fs::write(temp.path().join("outputs.tf"), "").unwrap();

    tfreadme(temp.path())
        .args(["generate", "--variables", "variables.tf.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("variables.tf.json"));
}

#[test]
fn force_without_output_is_rejected() {
    let temp = TempDir::new().unwrap();
    tfreadme(temp.path())
        .args(["generate", "--force"])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    tfreadme(temp.path())
        .args(["--config", "absent.toml", "generate"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_config_key() {
    let temp = TempDir::new().unwrap();
    tfreadme(temp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn verbose_error_omits_hint() {
    let temp = TempDir::new().unwrap();
    tfreadme(temp.path())
        .args(["-v", "generate"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
