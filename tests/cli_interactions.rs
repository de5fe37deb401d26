//! CLI options interaction tests
//!
//! These tests run the `dkt` binary inside a temporary working directory so
//! the default plot path and any `.env` file stay isolated.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "KS_COLUMN",
    "KS_ALPHA",
    "KS_METHOD",
    "KS_PLOT_OUTPUT",
    "KS_NOPLOT",
    "ENABLE_COLOR",
];

/// Helper function to create a test command running in `dir`
fn create_test_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dkt").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Write a two-column data file with a `#!` header
fn write_data(dir: &Path, name: &str, values: &[f64]) -> PathBuf {
    let mut content = String::from("#! time (ps)   distance (nm)\n#! generated for tests\n");
    for (i, value) in values.iter().enumerate() {
        content.push_str(&format!("{:>8.1} {:>10.4}\n", i as f64 * 10.0, value));
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn ramp(n: usize, offset: f64) -> Vec<f64> {
    (0..n).map(|i| offset + i as f64 * 0.01).collect()
}

#[test]
fn test_identical_files_column_zero_noplot() {
    let dir = TempDir::new().unwrap();
    let values = ramp(50, 0.5);
    write_data(dir.path(), "a.xvg", &values);
    write_data(dir.path(), "b.xvg", &values);

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-column", "0", "-noplot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will read column 1 from the data files"))
        .stdout(predicate::str::contains("KS statistic = 0.0000"))
        .stdout(predicate::str::contains("p-value = 1.0000e+00"))
        .stdout(predicate::str::contains("No significant difference between distributions detected."));

    assert!(!dir.path().join("ks_cdf.svg").exists());
}

#[test]
fn test_disjoint_samples_default_column() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(40, 0.1));
    write_data(dir.path(), "b.xvg", &ramp(40, 5.0));

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-noplot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will read column 2 from the data files"))
        .stdout(predicate::str::contains("KS statistic = 1.0000"))
        .stdout(predicate::str::contains("statistically significant difference (distributions differ)."));
}

#[test]
fn test_double_dash_flags_accepted() {
    let dir = TempDir::new().unwrap();
    let values = ramp(10, 1.0);
    write_data(dir.path(), "a.xvg", &values);
    write_data(dir.path(), "b.xvg", &values);

    create_test_cmd(dir.path())
        .args(["--sample1", "a.xvg", "--sample2", "b.xvg", "--noplot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KS statistic = 0.0000"));
}

#[test]
fn test_default_plot_written() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "wt.xvg", &ramp(30, 0.3));
    write_data(dir.path(), "mut.xvg", &ramp(30, 0.45));

    create_test_cmd(dir.path())
        .args(["-sample1", "wt.xvg", "-sample2", "mut.xvg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CDF plot written to ks_cdf.svg"));

    let svg = fs::read_to_string(dir.path().join("ks_cdf.svg")).unwrap();
    assert!(svg.contains("Cumulative Probability"));
    assert!(svg.contains("wt.xvg"));
    assert!(svg.contains("mut.xvg"));
}

#[test]
fn test_plot_output_flag() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(20, 0.3));
    write_data(dir.path(), "b.xvg", &ramp(20, 0.35));

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-plot-output", "chart.svg"])
        .assert()
        .success();

    assert!(dir.path().join("chart.svg").exists());
    assert!(!dir.path().join("ks_cdf.svg").exists());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(20, 0.3));
    write_data(dir.path(), "b.xvg", &ramp(20, 10.0));

    let output = create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-noplot", "-json", "-method", "exact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["column"], 1);
    assert_eq!(report["statistic"], 1.0);
    assert_eq!(report["method"], "exact");
    assert_eq!(report["verdict"], "significant");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(5, 0.3));

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "missing.xvg", "-noplot"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("missing.xvg"));
}

#[test]
fn test_missing_required_flag() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--sample2"));
}

#[test]
fn test_column_out_of_range() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(5, 0.3));
    write_data(dir.path(), "b.xvg", &ramp(5, 0.3));

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-column", "4", "-noplot"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_comment_only_file_is_empty_sample() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(5, 0.3));
    fs::write(dir.path().join("b.xvg"), "#! nothing here\n\n#! still nothing\n").unwrap();

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-noplot"])
        .assert()
        .code(6);
}

#[test]
fn test_conflicting_color_flags() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-color", "-no-color"])
        .assert()
        .code(2);
}

#[test]
fn test_env_file_settings_apply() {
    let dir = TempDir::new().unwrap();
    let values = ramp(10, 1.0);
    write_data(dir.path(), "a.xvg", &values);
    write_data(dir.path(), "b.xvg", &values);
    fs::write(dir.path().join(".env"), "KS_COLUMN=0\nKS_NOPLOT=true\n").unwrap();

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will read column 1 from the data files"));

    assert!(!dir.path().join("ks_cdf.svg").exists());

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-column", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will read column 2 from the data files"));
}

#[test]
fn test_invalid_method_rejected() {
    let dir = TempDir::new().unwrap();
    write_data(dir.path(), "a.xvg", &ramp(5, 0.3));
    write_data(dir.path(), "b.xvg", &ramp(5, 0.3));

    create_test_cmd(dir.path())
        .args(["-sample1", "a.xvg", "-sample2", "b.xvg", "-method", "bootstrap"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bootstrap"));
}

#[test]
fn test_help_states_plot_file() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(dir.path())
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("saved as an SVG file (ks_cdf.svg by default)"))
        .stdout(predicate::str::contains("-noplot"));
}
