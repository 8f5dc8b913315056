//! Integration tests for the geofuzz CLI.
//!
//! Exercises the binary end to end: argument parsing, file handling,
//! per-line fuzzing behavior, and exit codes.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn geofuzz() -> Command {
    Command::cargo_bin("geofuzz").unwrap()
}

fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_shows_usage() {
    geofuzz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--radius"))
        .stdout(predicate::str::contains("--lat_col"));
}

#[test]
fn missing_arguments_fail() {
    geofuzz()
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn fuzzes_a_two_line_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0\n41.0,-71.0\n");
    let output = dir.path().join("out.csv");

    geofuzz().arg(&input).arg(&output).assert().success();

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 2);
        let lat: f64 = fields[0].parse().unwrap();
        let lon: f64 = fields[1].parse().unwrap();
        assert!((-90.0..=90.0).contains(&lat));
        assert!((-180.0..=180.0).contains(&lon));
    }
}

#[test]
fn radius_bounds_the_displacement() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0\n");
    let output = dir.path().join("out.csv");

    geofuzz()
        .arg(&input)
        .arg(&output)
        .args(["--radius", "0.5"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let fields: Vec<&str> = text.trim_end().split(',').collect();
    let lat: f64 = fields[0].parse().unwrap();
    let lon: f64 = fields[1].parse().unwrap();
    let distance = ((lat - 40.0).powi(2) + (lon + 70.0).powi(2)).sqrt();
    assert!(
        distance <= 0.5 + 1e-12,
        "displacement {distance} exceeds radius"
    );
}

#[test]
fn short_rows_pass_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0\n");
    let output = dir.path().join("out.csv");

    geofuzz().arg(&input).arg(&output).assert().success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "40.0\n");
}

#[test]
fn non_numeric_rows_pass_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"name,place\n");
    let output = dir.path().join("out.csv");

    geofuzz().arg(&input).arg(&output).assert().success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "name,place\n");
}

#[test]
fn header_is_discarded() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"lat,lon\n40.0,-70.0\n");
    let output = dir.path().join("out.csv");

    geofuzz()
        .arg(&input)
        .arg(&output)
        .arg("--header")
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains("lat,lon"));
}

#[test]
fn empty_lines_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0\n\n41.0,-71.0\n");
    let output = dir.path().join("out.csv");

    geofuzz().arg(&input).arg(&output).assert().success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn custom_delimiter_and_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"id;40.0;-70.0\n");
    let output = dir.path().join("out.csv");

    geofuzz()
        .arg(&input)
        .arg(&output)
        .args(["--delimiter", ";", "--lat_col", "1", "--lon_col", "2"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let fields: Vec<&str> = text.trim_end().split(';').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "id");
    assert!(fields[1].parse::<f64>().is_ok());
    assert!(fields[2].parse::<f64>().is_ok());
}

#[test]
fn zero_radius_passes_rows_through() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0\n");
    let output = dir.path().join("out.csv");

    geofuzz()
        .arg(&input)
        .arg(&output)
        .args(["--radius", "0"])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "40.0,-70.0\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    geofuzz()
        .arg(dir.path().join("missing.csv"))
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn unknown_encoding_label_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0\n");

    geofuzz()
        .arg(&input)
        .arg(dir.path().join("out.csv"))
        .args(["--encoding", "not-a-real-encoding"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding label"));
}

#[test]
fn explicit_latin1_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0,caf\xe9\n");
    let output = dir.path().join("out.csv");

    geofuzz()
        .arg(&input)
        .arg(&output)
        .args(["--encoding", "latin1"])
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.windows(4).any(|w| w == b"caf\xe9"));
    assert!(!bytes.contains(&0xc3), "output was re-encoded as UTF-8");
}

#[test]
fn auto_detection_handles_non_utf8_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", b"40.0,-70.0,caf\xe9\n");
    let output = dir.path().join("out.csv");

    geofuzz().arg(&input).arg(&output).assert().success();

    // the sniff falls back to windows-1252, so the byte survives unchanged
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.windows(4).any(|w| w == b"caf\xe9"));
}
