//! Integration tests for the idmapper CLI
//!
//! These tests run the real binary against a config file in a temp
//! directory and a stub document store on localhost.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use common::stub_server::{StubDocStore, StubResponse};

const URL: &str = "http://ftalphaville.ft.com/?p=2193913";
const UUID: &str = "5414b08f-5ae1-3bd6-9901-a9dd1bf9db03";

/// Helper function to create an idmapper command
fn idmapper() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("idmapper"));
    cmd.env_remove("IDMAPPER_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Helper to write a config pointing at `base_url`
fn write_config(temp: &TempDir, base_url: &str) -> PathBuf {
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        format!(
            r#"[document_store]
base_url = "{base_url}"
timeout_secs = 5

[authorities]
"ftalphaville.ft.com" = "FT-LABS-WP-1-24"
"blogs.ft.com" = "FT-LABS-WP-1-2"
"#
        ),
    )
    .unwrap();
    path
}

fn alphaville_store() -> StubDocStore {
    StubDocStore::start(|request| {
        if request.url.starts_with("/content-query") && request.url.contains("FT-LABS-WP-1-24") {
            StubResponse::moved(&format!("http://api.ft.com/content/{UUID}"))
        } else if request.url == format!("/content/{UUID}") {
            StubResponse::status(200)
        } else {
            StubResponse::status(404)
        }
    })
}

// =============================================================================
// RESOLVE TESTS
// =============================================================================

#[test]
fn test_resolve_prints_uuid() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("--config")
        .arg(&config)
        .args(["resolve", URL, "--tid", "tid_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(UUID));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request_id.as_deref(), Some("tid_1"));
}

#[test]
fn test_resolve_json_output() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    let output = idmapper()
        .arg("--json")
        .arg("-c")
        .arg(&config)
        .args(["resolve", URL, "--tid", "tid_1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["uuid"], UUID);
    assert_eq!(json["post_id"], "2193913");
    assert_eq!(json["transaction_id"], "tid_1");
}

#[test]
fn test_resolve_generates_transaction_id() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper().arg("-c").arg(&config).args(["resolve", URL]).assert().success();

    let tid = stub.requests()[0].request_id.clone().unwrap();
    assert!(tid.starts_with("tid_"));
}

#[test]
fn test_resolve_unmapped_host_fails_without_request() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("-c")
        .arg(&config)
        .args(["resolve", "http://unknown.ft.com/?p=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't find authority in mapping table"));

    assert!(stub.requests().is_empty());
}

#[test]
fn test_resolve_not_found_fails() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("-c")
        .arg(&config)
        .args(["resolve", "http://blogs.ft.com/?p=5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}

#[test]
fn test_resolve_invalid_location_fails() {
    let temp = TempDir::new().unwrap();
    let stub = StubDocStore::start(|_| StubResponse::moved("wrong"));
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("-c")
        .arg(&config)
        .args(["resolve", URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid FT URI"));
}

// =============================================================================
// EXISTS TESTS
// =============================================================================

#[test]
fn test_exists_reports_found() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("-c")
        .arg(&config)
        .args(["exists", UUID])
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn test_exists_reports_missing() {
    let temp = TempDir::new().unwrap();
    let stub = alphaville_store();
    let config = write_config(&temp, stub.base_url());

    idmapper()
        .arg("-c")
        .arg(&config)
        .args(["--json", "exists", "00000000-0000-0000-0000-000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": false"));
}

// =============================================================================
// CONFIG AND MISC TESTS
// =============================================================================

#[test]
fn test_authorities_lists_table() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "http://127.0.0.1:1");

    idmapper()
        .arg("-c")
        .arg(&config)
        .arg("authorities")
        .assert()
        .success()
        .stdout(predicate::str::contains("ftalphaville.ft.com"))
        .stdout(predicate::str::contains("FT-LABS-WP-1-24"))
        .stdout(predicate::str::contains("blogs.ft.com"));
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "http://127.0.0.1:1");

    idmapper()
        .env("IDMAPPER_CONFIG", &config)
        .arg("authorities")
        .assert()
        .success()
        .stdout(predicate::str::contains("FT-LABS-WP-1-2"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    idmapper()
        .arg("-c")
        .arg(temp.path().join("nope.toml"))
        .args(["resolve", URL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_version() {
    idmapper()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("idmapper v{}", env!("CARGO_PKG_VERSION"))));
}
