//! End-to-end tests of the `body-measure` binary.

#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A 1.8 m column with a 64-vertex waist ring of radius `r` at y = 0.9.
fn body_json(r: f64) -> String {
    let mut rows: Vec<String> = (0..64)
        .map(|i| {
            let t = TAU * f64::from(i) / 64.0;
            format!("[{}, 0.9, {}]", r * t.cos(), r * t.sin())
        })
        .collect();
    rows.push("[0, 0, 0]".to_string());
    rows.push("[0, 1.8, 0]".to_string());
    format!(r#"{{"smpl_vertices": [[{}]]}}"#, rows.join(", "))
}

fn write_body(dir: &Path, name: &str, r: f64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body_json(r)).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_body-measure"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn compare_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let before = write_body(dir.path(), "before.json", 0.15);
    let after = write_body(dir.path(), "after.json", 0.14);

    let output = run(&[
        "compare",
        before.to_str().unwrap(),
        after.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "=== Circumference change by body part ===",
            "Waist: before 0.94, after 0.88, change -0.06",
            "Thigh: insufficient data",
            "Arm: insufficient data",
        ]
    );
}

#[test]
fn compare_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let before = write_body(dir.path(), "before.json", 0.15);
    let after = write_body(dir.path(), "after.json", 0.14);

    let output = run(&[
        "compare",
        before.to_str().unwrap(),
        after.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let waist = &json["parts"]["waist"];
    assert_eq!(waist["status"], "measured");
    assert!(waist["delta"].as_f64().unwrap() < 0.0);
    assert_eq!(json["parts"]["arm"]["status"], "insufficient_data");
    assert!(json["parts"]["arm"]["before"].is_null());
    assert!((json["heights"]["heights"]["waist"].as_f64().unwrap() - 0.9).abs() < 1e-9);
}

#[test]
fn measure_at_height() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write_body(dir.path(), "body.json", 0.15);

    let output = run(&[
        "measure",
        mesh.to_str().unwrap(),
        "--height",
        "0.9",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["slice_points"], 64);
    assert_eq!(json["hull_vertices"], 64);
    let c = json["circumference"].as_f64().unwrap();
    assert!((c - 0.942).abs() < 1e-3);
}

#[test]
fn measure_sparse_height_is_insufficient() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write_body(dir.path(), "body.json", 0.15);

    let output = run(&["measure", mesh.to_str().unwrap(), "--height", "0.5"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("insufficient data"));
}

#[test]
fn heights_follow_axis_flag() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write_body(dir.path(), "body.json", 0.15);

    let output = run(&["heights", mesh.to_str().unwrap(), "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["axis"], "y");
    assert!((json["heights"]["thigh"].as_f64().unwrap() - 0.45).abs() < 1e-9);

    let output = run(&[
        "heights",
        mesh.to_str().unwrap(),
        "--axis",
        "x",
        "--format",
        "json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["axis"], "x");
    assert!((json["min"].as_f64().unwrap() + 0.15).abs() < 1e-9);
}

#[test]
fn verbose_flag_logs_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write_body(dir.path(), "body.json", 0.15);

    let output = run(&["-vv", "measure", mesh.to_str().unwrap(), "--height", "0.9"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Measurement parameters"), "stderr: {stderr}");
    assert!(stderr.contains("0.02"), "stderr: {stderr}");

    let plain = run(&["measure", mesh.to_str().unwrap(), "--height", "0.9"]);
    assert!(!String::from_utf8(plain.stderr).unwrap().contains("Measurement parameters"));
}

#[test]
fn missing_file_fails() {
    let output = run(&["info", "/nonexistent/body.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load mesh"));
}

#[test]
fn invalid_tolerance_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = write_body(dir.path(), "body.json", 0.15);

    let output = run(&["measure", mesh.to_str().unwrap(), "--tolerance", "0"]);
    assert!(!output.status.success());
}
