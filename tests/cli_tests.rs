//! CLI integration tests
//!
//! These tests verify the binary end to end: argument handling, output
//! selection and failure reporting.

mod common;

use std::process::Command;
use tempfile::TempDir;

fn wsdldoc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wsdldoc"))
}

fn fixture_path(name: &str) -> String {
    common::fixtures_dir().join(name).to_string_lossy().into_owned()
}

#[test]
fn test_cli_text_report() {
    let output = wsdldoc()
        .arg(fixture_path("user_service.wsdl"))
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "text report should succeed");
    assert!(stdout.contains("WSDL Analysis Report"));
    assert!(stdout.contains("[Service] UserService"));
    assert!(stdout.contains("[ComplexType] Order"));
}

#[test]
fn test_cli_html_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");

    let output = wsdldoc()
        .args([
            fixture_path("user_service.wsdl").as_str(),
            "--format",
            "html",
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "html report should succeed");
    assert!(output.stdout.is_empty(), "report goes to the file, not stdout");

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"id="section-types""#));
}

#[test]
fn test_cli_json_output() {
    let output = wsdldoc()
        .args([fixture_path("user_service.wsdl").as_str(), "-f", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["messages"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_missing_file() {
    let output = wsdldoc()
        .arg(fixture_path("does_not_exist.wsdl"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "should fail for a missing file");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file not found"));
}

#[test]
fn test_cli_malformed_xml() {
    let output = wsdldoc()
        .arg(fixture_path("malformed.wsdl"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "should fail for malformed XML");
    assert!(output.stdout.is_empty(), "nothing is rendered on load failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed XML"));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let output = wsdldoc()
        .args([fixture_path("user_service.wsdl").as_str(), "--format", "pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_cli_unwritable_output_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("report.txt");

    let output = wsdldoc()
        .args([
            fixture_path("user_service.wsdl").as_str(),
            "--output",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: I/O error"));
}
