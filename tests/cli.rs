#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! End-to-end tests for both subcommands through the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn verif_tools(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verif-tools").expect("verif-tools binary");
    cmd.current_dir(dir).env_remove("VERIF_TOOLS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, content).expect("write fixture");
}

#[test]
fn html_report_from_default_paths() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("results/summary.log"), "t1:PASS:1.2\nt2:FAIL:0.5\n");

    verif_tools(dir.path())
        .arg("html-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated: report.html"));

    let html = fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert!(html.contains("Pass rate: 50.0%"));
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[test]
fn html_report_without_summary_is_empty() {
    let dir = tempdir().unwrap();

    verif_tools(dir.path())
        .args(["html-report", "missing_results", "out.html"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.contains("style=\"width: 0.0%\""));
    assert_eq!(html.matches("<tr>").count(), 1);
}

#[test]
fn html_report_unwritable_output_fails() {
    let dir = tempdir().unwrap();

    verif_tools(dir.path())
        .args(["html-report", "results", "no/such/dir/report.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn parse_log_end_to_end() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("sim/vcs/simv.log"), "[ERROR] oops\nTEST FAILED\n[INFO] [DRV] start\n");

    verif_tools(dir.path())
        .arg("parse-log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("Warnings: 0"))
        .stdout(predicate::str::contains("Info: 1"))
        .stdout(predicate::str::contains("❌ Test result: FAILED"))
        .stdout(predicate::str::contains("1. [ERROR] oops"))
        .stdout(predicate::str::contains("✅ No warnings"))
        .stdout(predicate::str::contains("  DRV: 1"));
}

#[test]
fn parse_log_missing_file_exits_nonzero() {
    let dir = tempdir().unwrap();

    verif_tools(dir.path())
        .args(["parse-log", "absent.log"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File does not exist - absent.log"));
}

#[test]
fn parse_log_quiet_prints_summary_only() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("run.log"), "[ERROR] oops\n[WARN] careful\nTEST PASSED\n");

    verif_tools(dir.path())
        .args(["parse-log", "run.log", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Test result: PASSED"))
        .stdout(predicate::str::contains("[ERROR] oops").not())
        .stdout(predicate::str::contains("Component statistics").not());
}

#[test]
fn parse_log_errors_only_skips_warnings() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("run.log"), "[ERROR] oops\n[WARN] careful\n");

    verif_tools(dir.path())
        .args(["parse-log", "run.log", "--errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ERROR] oops"))
        .stdout(predicate::str::contains("[WARN] careful").not());
}

#[test]
fn parse_log_writes_text_report() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("run.log"), "UVM_ERROR @ 10: bad\nuvm_info: ok\n");

    verif_tools(dir.path())
        .args(["parse-log", "run.log", "-q", "-o", "log_report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated: log_report.txt"));

    let report = fs::read_to_string(dir.path().join("log_report.txt")).unwrap();
    assert!(report.contains("Errors: 1"));
    assert!(report.contains("  - UVM_ERROR @ 10: bad"));
}

#[test]
fn parse_log_unwritable_report_is_not_fatal() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("run.log"), "[INFO] hi\n");

    verif_tools(dir.path())
        .args(["parse-log", "run.log", "-q", "-o", "no/such/dir/report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: failed to write report"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("logs/xrun.log"), "[WARN] a\n[WARN] b\n[WARN] c\n");
    write_file(
        &dir.path().join("verif-tools.toml"),
        "[log]\nlog-file = \"logs/xrun.log\"\ndetail-limit = 2\n",
    );

    verif_tools(dir.path())
        .args(["--config", "verif-tools.toml", "parse-log", "--warnings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings (first 2):"))
        .stdout(predicate::str::contains("... 1 more warnings"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("bad.toml"), "[log\n");

    verif_tools(dir.path())
        .args(["--config", "bad.toml", "html-report"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
