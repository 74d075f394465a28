//! Integration tests for the `pantry` CLI binary.
//!
//! Offline commands run against an isolated home directory; remote commands
//! run against a wiremock server passed via `--base-url`.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `pantry` binary with env isolation.
///
/// Clears all `PANTRY_*` env vars and points config and data directories at
/// `home` so tests never touch the user's real configuration or session.
fn pantry_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pantry");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("PANTRY_SESSION_FILE", home.join("session.json"))
        .env("NO_COLOR", "1")
        .env_remove("PANTRY_BASE_URL")
        .env_remove("PANTRY_TIMEOUT")
        .env_remove("PANTRY_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = TempDir::new().unwrap();
    let output = pantry_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("recipes")
            .and(predicate::str::contains("users"))
            .and(predicate::str::contains("register"))
            .and(predicate::str::contains("date")),
    );
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pantry"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_invalid_output_format() {
    let home = TempDir::new().unwrap();
    let output = pantry_cmd(home.path())
        .args(["--output", "xml", "status"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Date conversion ─────────────────────────────────────────────────

#[test]
fn test_date_iso_to_display() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["date", "2024-04-03"])
        .assert()
        .success()
        .stdout("03/04/2024\n");
}

#[test]
fn test_date_display_to_iso() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["date", "03/04/2024"])
        .assert()
        .success()
        .stdout("2024-04-03\n");
}

#[test]
fn test_date_strip_time() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["date", "2024-04-03T10:00:00Z", "--strip-time"])
        .assert()
        .success()
        .stdout("03/04/2024\n");
}

#[test]
fn test_date_without_separator_is_usage_error() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["date", "20240403"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for date"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://dummyjson.com")
                .and(predicate::str::contains("\"timeout\": 30")),
        );
}

#[test]
fn test_config_init_refuses_overwrite() {
    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["--timeout", "12", "config", "init"])
        .assert()
        .success();

    pantry_cmd(home.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    // The saved timeout is picked up by later invocations.
    pantry_cmd(home.path())
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeout\": 12"));

    pantry_cmd(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

// ── Remote commands ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_recipes_list_plain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{ "id": 1, "name": "Margherita" }, { "id": 2, "name": "Tabbouleh" }],
            "total": 2, "skip": 0, "limit": 30
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "plain", "recipes", "list"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_recipes_tagged_plain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/tag/Pizza"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [{ "id": 1, "name": "Margherita" }],
            "total": 1, "skip": 0, "limit": 30
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["--base-url", &server.uri(), "-o", "plain", "recipes", "tagged", "Pizza"])
        .assert()
        .success()
        .stdout("1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_tag_exits_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/tag/Nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no such tag" })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    pantry_cmd(home.path())
        .args(["--base-url", &server.uri(), "recipes", "tagged", "Nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no such tag"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_status_logout_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/add"))
        .and(body_partial_json(json!({ "monthlyIncome": 2500.5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 209,
            "fullName": "Ana Souza"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let payload = home.path().join("registration.json");
    std::fs::write(
        &payload,
        json!({
            "fullName": "Ana Souza",
            "birthDate": "2000-01-31",
            "monthlyIncome": "2.500,50"
        })
        .to_string(),
    )
    .unwrap();

    let base = server.uri();
    let status = |expected: &'static str| {
        pantry_cmd(home.path())
            .args(["--base-url", &base, "-o", "plain", "status"])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    };

    status("false");

    pantry_cmd(home.path())
        .args(["--base-url", &base, "-o", "plain", "register", "--from-file"])
        .arg(&payload)
        .assert()
        .success()
        .stdout("209\n");

    status("true");

    pantry_cmd(home.path())
        .args(["--base-url", &base, "logout"])
        .assert()
        .success();

    status("false");
}
