//! Integration tests for CLI

mod common;

use assert_cmd::Command;
use common::{local_seconds, write_cyclic_fixture, write_fixture, VISIT_MICROS};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn places_export(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("places-export"));
    cmd.current_dir(cwd)
        .env_remove("PLACES_EXPORT_PREFIX")
        .env_remove("PLACES_EXPORT_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    places_export(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("places-export"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    places_export(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("places.sqlite"))
        .stdout(predicate::str::contains("--output-prefix"))
        .stdout(predicate::str::contains("--do-github"));
}

#[test]
fn test_missing_file_exits_cleanly() {
    let tmp = TempDir::new().expect("tmp");
    places_export(tmp.path())
        .arg("missing.sqlite")
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR: Cannot find missing.sqlite"));
    assert!(!tmp.path().join("output").exists());
}

#[test]
fn test_export_writes_all_outputs() {
    let tmp = TempDir::new().expect("tmp");
    let db = write_fixture(tmp.path());
    places_export(tmp.path())
        .args([db.to_str().expect("utf8 path"), "-p", "PC_2", "-g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("PC_2-history.csv'"))
        .stdout(predicate::str::contains("Done."));

    let out = tmp.path().join("output");
    for suffix in [
        "history.csv",
        "bookmarks.csv",
        "bookmarks.html",
        "frecency.csv",
        "recent-links.html",
        "github-links.html",
    ] {
        assert!(out.join(format!("PC_2-{suffix}")).is_file(), "missing PC_2-{suffix}");
    }

    let history = fs::read_to_string(out.join("PC_2-history.csv")).expect("history");
    assert_eq!(history.lines().count(), 2);
    assert!(history.contains(&local_seconds(VISIT_MICROS)));

    let github = fs::read_to_string(out.join("PC_2-github-links.html")).expect("github");
    assert!(github.contains("https://github.com/rust-lang/rust"));
    assert!(!github.contains("docs.example.com"));
}

#[test]
fn test_output_dir_and_report_flags() {
    let tmp = TempDir::new().expect("tmp");
    let db = write_fixture(tmp.path());
    let out = tmp.path().join("reports");
    places_export(tmp.path())
        .args([
            db.to_str().expect("utf8 path"),
            "--output-dir",
            out.to_str().expect("utf8 out"),
            "--no-timestamp",
            "--report",
        ])
        .assert()
        .success();

    assert!(!out.join("places-github-links.html").exists());
    let html = fs::read_to_string(out.join("places-bookmarks.html")).expect("html");
    assert!(html.contains("<p id=\"footer\">Generated by places-export"));
    assert!(!html.contains(" at "));

    let report = fs::read_to_string(out.join("places-report.json")).expect("report");
    let doc: serde_json::Value = serde_json::from_str(&report).expect("json");
    assert!(doc.get("generated_at").is_none());
    assert_eq!(doc["bookmarks_skipped"], serde_json::json!(1));
    assert_eq!(doc["output_files"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_config_file_sets_prefix() {
    let tmp = TempDir::new().expect("tmp");
    let db = write_fixture(tmp.path());
    fs::write(tmp.path().join("places-export.toml"), "output_prefix = 'cfg'\n").expect("config");
    places_export(tmp.path()).arg(db.to_str().expect("utf8 path")).assert().success();
    assert!(tmp.path().join("output").join("cfg-bookmarks.csv").is_file());
}

#[test]
fn test_cyclic_folders_fail() {
    let tmp = TempDir::new().expect("tmp");
    let db = write_cyclic_fixture(tmp.path());
    places_export(tmp.path())
        .arg(db.to_str().expect("utf8 path"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Done (with errors)."))
        .stderr(predicate::str::contains("Bookmark folder tree in"))
        .stderr(predicate::str::contains("is corrupt"))
        .stderr(predicate::str::contains("folder tree deeper than 99 levels"));
}
