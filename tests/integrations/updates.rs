use alertmail::config::UpdateCheckConfig;
use alertmail::core::PackageInfo;
use alertmail::updates::{check, UpdateStatus};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const CRATE_PATH: &str = "/api/v1/crates/alertmail";

fn registry_config(server: &mockito::Server) -> UpdateCheckConfig {
    UpdateCheckConfig {
        registry_url: server.url(),
        timeout_seconds: 5,
    }
}

fn crate_body(stable: &str, max: &str) -> String {
    serde_json::json!({
        "crate": { "max_stable_version": stable, "max_version": max }
    })
    .to_string()
}

#[test]
fn test_up_to_date() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", CRATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(crate_body(env!("CARGO_PKG_VERSION"), "99.0.0-beta.1"))
        .create();

    let status = check(&registry_config(&server), &PackageInfo::current()).unwrap();

    mock.assert();
    assert!(matches!(status, UpdateStatus::UpToDate { .. }));
    assert_eq!(status.exit_code(), 0);
}

#[test]
fn test_outdated() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", CRATE_PATH)
        .match_header("user-agent", format!("alertmail/{}", env!("CARGO_PKG_VERSION")).as_str())
        .with_status(200)
        .with_body(crate_body("99.0.0", "99.0.0"))
        .create();

    let status = check(&registry_config(&server), &PackageInfo::current()).unwrap();

    assert_eq!(status.exit_code(), 1);
    assert!(status.to_string().contains("latest: 99.0.0"));
}

#[test]
fn test_registry_error_is_reported() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", CRATE_PATH).with_status(404).create();

    assert!(check(&registry_config(&server), &PackageInfo::current()).is_err());
}

#[test]
fn test_updates_flag_exits_with_check_status() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", CRATE_PATH)
        .with_status(200)
        .with_body(crate_body("99.0.0", "99.0.0"))
        .create();

    // No recipient is configured; the check short-circuits everything else.
    Command::cargo_bin("alertmail")
        .unwrap()
        .env_clear()
        .env("ALERTMAIL_UPDATE_CHECK__REGISTRY_URL", server.url())
        .arg("-u")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is out of date (latest: 99.0.0)"));
}

#[test]
fn test_updates_flag_with_unreachable_registry() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", CRATE_PATH).with_status(500).create();

    Command::cargo_bin("alertmail")
        .unwrap()
        .env_clear()
        .env("ALERTMAIL_UPDATE_CHECK__REGISTRY_URL", server.url())
        .arg("--updates")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Update check failed"));
}
