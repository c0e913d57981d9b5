//! Integration tests for configuration resolution

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::dentdoc_cmd;

#[test]
fn test_config_flag_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentdoc.toml");
    fs::write(
        &path,
        "clinic = \"Клиника на Лесной\"\ndate_format = \"%Y-%m-%d\"\n",
    )
    .unwrap();

    dentdoc_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Клиника на Лесной"))
        .stdout(predicate::str::contains("2024-11-20"))
        .stdout(predicate::str::contains("20.11.2024").not());
}

#[test]
fn test_config_env_var() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentdoc.toml");
    fs::write(&path, "seed = false\n").unwrap();

    dentdoc_cmd()
        .env("DENTDOC_CONFIG", &path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Всего документов\s+0").unwrap());
}

#[test]
fn test_config_missing_file() {
    let temp = TempDir::new().unwrap();

    dentdoc_cmd()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentdoc.toml");
    fs::write(&path, "seed = \"maybe\"\n").unwrap();

    dentdoc_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_config_invalid_date_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentdoc.toml");
    fs::write(&path, "date_format = \"%Q\"\n").unwrap();

    dentdoc_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_config_time_only_date_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dentdoc.toml");
    fs::write(&path, "date_format = \"%H:%M\"\n").unwrap();

    dentdoc_cmd()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date format: '%H:%M'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_invalid_id_strategy_env() {
    dentdoc_cmd()
        .env("DENTDOC_ID_STRATEGY", "random")
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid id strategy"))
        .stderr(predicate::str::contains("counter, uuid"));
}
