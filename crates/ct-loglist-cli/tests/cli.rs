//! End-to-end tests for the `ctloglist` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const LOG_LIST_JSON: &str = r#"{
    "logs": [
        {
            "description": "Google 'Pilot' log",
            "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEfahLEimAoz2t01p3uMziiLOl/fHTDM0YDOhBRuiBARsV4UvxG2LdNgoIGLrtCzWE0J5APC2em4JlvR8EEEFMoA==",
            "url": "ct.googleapis.com/pilot/",
            "maximum_merge_delay": 86400,
            "operated_by": [0]
        },
        {
            "description": "Google 'Aviator' log",
            "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE1/TMabLkDpCjiupacAlP7xNi0I1JYP8bQFAHDG1xhtolSY1l4QgNRzRrvSe8liE+NPWHdjGxfx3JhTsN9x8/6Q==",
            "url": "ct.googleapis.com/aviator/",
            "maximum_merge_delay": 86400,
            "operated_by": [0]
        }
    ],
    "operators": [{"id": 0, "name": "Google"}]
}"#;

fn registry(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

fn ctloglist(registry: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("ctloglist").expect("binary");
    cmd.env_remove("CT_LOG_LIST")
        .env_remove("CT_LOG_LIST_URL")
        .arg("--log-list")
        .arg(registry.path())
        .arg("--url")
        .arg("not a url");
    cmd
}

#[test]
fn list_prints_table() {
    let file = registry(LOG_LIST_JSON);
    ctloglist(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("pLkJkLQYWBSHuxOizGdwCjw1mAT5G9+443fNDsgN3BA="))
        .stdout(predicate::str::contains("Google 'Aviator' log"))
        .stdout(predicate::str::contains("Total: 2 log(s)"));
}

#[test]
fn list_prints_json() {
    let file = registry(LOG_LIST_JSON);
    let output = ctloglist(&file)
        .args(["list", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["logs"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["logs"][1]["log_id"], "aPaY+B9kgr46jO65KB1M/HFRXWeT1ETRCmesu09P+8Q=");
}

#[test]
fn show_by_hex_id() {
    let file = registry(LOG_LIST_JSON);
    ctloglist(&file)
        .args([
            "show",
            "a4b90990b418581487bb13a2cc67700a3c359804f91bdfb8e377cd0ec80ddc10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Google 'Pilot' log"))
        .stdout(predicate::str::contains("-----BEGIN CT LOG ID-----"))
        .stdout(predicate::str::contains("-----END PUBLIC KEY-----"));
}

#[test]
fn show_unknown_id_fails() {
    let file = registry(LOG_LIST_JSON);
    ctloglist(&file)
        .args(["show", "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no log with ID"));
}

#[test]
fn invalid_local_file_is_reported() {
    let file = registry("{not json");
    ctloglist(&file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log list document parsing failed"));
}

#[test]
fn missing_local_file_falls_back_to_download() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("ctloglist")
        .expect("binary")
        .env_remove("CT_LOG_LIST")
        .arg("--log-list")
        .arg(dir.path().join("absent.json"))
        .args(["--url", "not a url", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("log list download failed"));
}
