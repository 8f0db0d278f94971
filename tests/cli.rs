//! End-to-end tests for the docdump CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn docdump() -> Command {
    Command::cargo_bin("docdump").unwrap()
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_exports_collection_to_dated_csv() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(
        data.path().join("quotes.json"),
        r#"[{"id": 1, "text": "hi"}, {"id": 2, "starred": true}]"#,
    )
    .unwrap();
    let config = write_config(
        data.path(),
        r#"{"targets": [{"path": "quotes", "type": "collection"}], "storage": {"bucket": "backups"}}"#,
    );

    docdump()
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(data.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--date")
        .arg("2026-08-07")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 exported, 0 skipped, 0 failed"));

    let csv = fs::read_to_string(out.path().join("backups/2026-08-07/quotes.csv")).unwrap();
    assert_eq!(csv, "id,text,starred\n1,hi,\n2,,true\n");
}

#[test]
fn test_failed_target_skipped_but_siblings_exported() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(data.path().join("good.json"), r#"[{"a": 1}]"#).unwrap();
    let config = write_config(
        data.path(),
        r#"{"targets": [{"path": "missing"}, {"path": "good"}], "storage": {"bucket": "backups"}}"#,
    );

    docdump()
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(data.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--date")
        .arg("2026-08-07")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 exported, 0 skipped, 1 failed"));

    assert!(out.path().join("backups/2026-08-07/good.csv").is_file());
}

#[test]
fn test_empty_collection_skips_upload() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(data.path().join("empty.json"), "[]").unwrap();
    let config = write_config(
        data.path(),
        r#"{"targets": [{"path": "empty"}], "storage": {"bucket": "backups"}}"#,
    );

    docdump()
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(data.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--date")
        .arg("2026-08-07")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 exported, 1 skipped, 0 failed"));

    assert!(!out.path().join("backups/2026-08-07/empty.csv").exists());
}

#[test]
fn test_malformed_config_is_a_hard_error() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = write_config(data.path(), "{ not json");

    docdump()
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(data.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
