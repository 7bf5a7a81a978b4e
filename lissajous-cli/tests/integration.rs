//! Integration tests for lissajous CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the binary cargo built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lissajous"))
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Fresh scratch directory for tests that write files.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lissajous-test-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[test]
fn generate_produces_svg_by_default() {
    let output = run(&["generate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<polyline"), "Should have the curve");
    assert!(stdout.contains(r#"stroke="blue""#), "Default color is blue");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn generate_json_has_requested_point_count() {
    let output = run(&["generate", "-x", "2", "-y", "3", "-r", "5", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["count"], 5);

    let points = value["points"].as_array().unwrap();
    assert_eq!(points.len(), 5);
    assert!(points[0]["x"].as_f64().unwrap().abs() < 1e-9);
    assert!((points[0]["y"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((points[4]["y"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn generate_points_format_accepts_negative_values() {
    let output = run(&["generate", "-x", "-1.5", "--shift", "-0.5", "-r", "7", "-f", "points"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 7);
    for line in stdout.lines() {
        let coords: Vec<f64> = line.split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(coords.len(), 2);
        assert!(coords.iter().all(|c| (-1.0..=1.0).contains(c)));
    }
}

#[test]
fn generate_rejects_bad_resolution() {
    for bad in ["0", "1", "-5", "3.5", "many"] {
        let output = run(&["generate", "--resolution", bad]);
        assert!(!output.status.success(), "resolution {} should be rejected", bad);
        assert!(output.stdout.is_empty(), "no figure should be written for {}", bad);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("resolution"), "error should name the parameter: {}", stderr);
    }
}

#[test]
fn generate_rejects_non_finite_frequency() {
    let output = run(&["generate", "--freq-x", "NaN"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("freq_x"));
}

#[test]
fn generate_rejects_unknown_color_and_width() {
    let output = run(&["generate", "--color", "ultraviolet"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown color"));

    let output = run(&["generate", "--width", "9"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("width"));
}

#[test]
fn generate_is_deterministic() {
    let args = ["generate", "-x", "5", "-y", "4", "-s", "0.3", "-r", "100", "-f", "points"];
    let a = run(&args);
    let b = run(&args);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn settings_file_and_flag_override() {
    let dir = scratch_dir("settings");
    let settings = dir.join("figure.yaml");
    fs::write(&settings, "resolution: 12\ncolor: Red\nwidth: 3\n").unwrap();

    let output = run(&["generate", "--settings", settings.to_str().unwrap(), "-f", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 12);

    let output = run(&["generate", "--settings", settings.to_str().unwrap(), "-r", "4", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 4);

    let output = run(&["generate", "--settings", settings.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"stroke="red""#));
    assert!(stdout.contains(r#"stroke-width="3""#));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_settings_file_fails() {
    let output = run(&["generate", "--settings", "/no/such/settings.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load settings"));
}

#[test]
fn custom_palette_resolves_labels() {
    let dir = scratch_dir("palette");
    let palette = dir.join("palette.json");
    fs::write(&palette, r##"{"Sea": "#2a9d8f", "Sand": "#e9c46a"}"##).unwrap();

    let output = run(&["generate", "--palette", palette.to_str().unwrap(), "--color", "Sea"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(r##"stroke="#2a9d8f""##));

    let output = run(&["colors", "--palette", palette.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sand"));
    assert!(stdout.contains("Sea"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_writes_output_file() {
    let dir = scratch_dir("output");
    let path = dir.join("figure.svg");

    let output = run(&["generate", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Wrote:"));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<polyline"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn colors_lists_builtin_palette() {
    let output = run(&["colors"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Blue"));
    assert!(stdout.contains("Red"));
    // Default color is marked
    assert!(stdout.lines().any(|l| l.contains('*') && l.contains("blue")));
}

#[test]
fn settings_prints_defaults() {
    let output = run(&["settings"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("freq_x: 2"));
    assert!(stdout.contains("freq_y: 3"));
    assert!(stdout.contains("resolution: 20"));
    assert!(stdout.contains("color: blue"));
    assert!(stdout.contains("width: 2"));
}

#[test]
fn benchmark_reports_each_resolution() {
    let output = run(&["benchmark", "-r", "10,200", "-n", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BENCHMARK"));
    assert!(stdout.contains("10 points"));
    assert!(stdout.contains("200 points"));
}
