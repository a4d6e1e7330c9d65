//! Integration tests for tarsink-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tarsink_core::test_utils::TarTestBuilder;
use tempfile::TempDir;

fn tarsink_cmd() -> Command {
    cargo_bin_cmd!("tarsink")
}

/// Writes a small logs archive into `dir` and returns its path.
fn write_logs_archive(dir: &Path) -> PathBuf {
    let path = dir.join("logs.tar.gz");
    let data = TarTestBuilder::new()
        .add_directory("logs/")
        .add_file("logs/app.log", b"hello")
        .build_gz();
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn test_version_flag() {
    tarsink_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarsink"));
}

#[test]
fn test_help_flag() {
    tarsink_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_extract_help() {
    tarsink_cmd()
        .arg("extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--clamp-traversal"));
}

#[test]
fn test_extract_creates_files() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_logs_archive(temp.path());
    let out = temp.path().join("out");

    tarsink_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted to"));

    assert_eq!(fs::read(out.join("logs/app.log")).unwrap(), b"hello");
}

#[test]
fn test_extract_to_current_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_logs_archive(temp.path());
    let out = temp.path().join("cwd");
    fs::create_dir(&out).unwrap();

    tarsink_cmd()
        .current_dir(&out)
        .arg("extract")
        .arg(&archive)
        .assert()
        .success();

    assert!(out.join("logs/app.log").is_file());
}

#[test]
fn test_extract_from_stdin() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let data = TarTestBuilder::new().add_file("piped.txt", b"via stdin").build();

    tarsink_cmd()
        .arg("extract")
        .arg("-")
        .arg(temp.path())
        .write_stdin(data)
        .assert()
        .success();

    assert_eq!(
        fs::read(temp.path().join("piped.txt")).unwrap(),
        b"via stdin"
    );
}

#[test]
fn test_extract_json_output_counts() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_logs_archive(temp.path());

    let output = tarsink_cmd()
        .arg("--json")
        .arg("extract")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files_extracted"], 1);
    assert_eq!(json["data"]["directories_created"], 1);
    assert_eq!(json["data"]["bytes_written"], 5);
    assert_eq!(json["data"]["mtimes"]["attempted"], 1);
}

#[test]
fn test_extract_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    tarsink_cmd()
        .arg("extract")
        .arg(temp.path().join("missing.tar"))
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_extract_short_stream_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let out = temp.path().join("out");

    tarsink_cmd()
        .arg("extract")
        .arg("-")
        .arg(&out)
        .write_stdin(vec![0x1F])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a tar or tar.gz archive"));

    assert!(!out.exists());
}

#[test]
fn test_traversal_rejected_by_default() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("evil.tar");
    fs::write(
        &archive,
        TarTestBuilder::new().add_raw_file("../evil.txt", b"x").build(),
    )
    .unwrap();

    tarsink_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("path traversal"))
        .stderr(predicate::str::contains("HINT"));

    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn test_traversal_clamped_with_flag() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("evil.tar");
    fs::write(
        &archive,
        TarTestBuilder::new().add_raw_file("../evil.txt", b"x").build(),
    )
    .unwrap();
    let out = temp.path().join("out");

    tarsink_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&out)
        .arg("--clamp-traversal")
        .assert()
        .success();

    assert!(out.join("evil.txt").is_file());
    assert!(!temp.path().join("evil.txt").exists());
}

#[test]
fn test_json_error_envelope() {
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = tarsink_cmd()
        .arg("--json")
        .arg("extract")
        .arg("-")
        .arg(temp.path())
        .write_stdin(Vec::new())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("stream too short"));
}

#[test]
fn test_quiet_mode_prints_nothing() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_logs_archive(temp.path());

    tarsink_cmd()
        .arg("-q")
        .arg("extract")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_logs_archive(temp.path());

    tarsink_cmd()
        .arg("-v")
        .arg("extract")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains("extraction complete"))
        .stdout(predicate::str::contains("Modification times:"));
}

#[test]
fn test_completion_bash() {
    tarsink_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarsink"));
}
