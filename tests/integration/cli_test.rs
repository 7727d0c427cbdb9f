//! Integration tests for the seekline command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{run_seekline, temp_fixture};

fn seekline() -> Command {
    let mut cmd = Command::cargo_bin("seekline").expect("binary should be built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_seekline(&["--help"]);

    assert_eq!(exit_code, 0);
    for sub in ["play", "frame", "config", "completions"] {
        assert!(stdout.contains(sub), "help should mention {}", sub);
    }
}

#[test]
fn frame_help_documents_highlight_syntax() {
    seekline()
        .args(["frame", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("START:END[:COLOR[:LABEL]]"));
}

// ============================================================================
// Frame Tests
// ============================================================================

#[test]
fn frame_prints_display_list() {
    let (stdout, stderr, exit_code) = run_seekline(&[
        "frame",
        "a.ogg",
        "--duration",
        "200",
        "--time",
        "50",
        "--width",
        "40",
        "--highlight",
        "25:50",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    clear 0,0 40x1
    fill  0,0 40x1 #ebedf0
    fill  5,0 5x1 #ffd900
    fill  0,0 10x1 linear(0,0 -> 40,1; 0:#25187e 0.47:#377dff 1:#00abc3)
    ");
}

#[test]
fn frame_uses_config_colors() {
    let (_temp_dir, path) = temp_fixture("widget.toml");
    seekline()
        .args(["frame", "other.ogg", "--duration", "240", "--width", "240"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("fill  0,0 240x1 #202020"))
        .stdout(predicate::str::contains("fill  30,0 15x1 #ff8800"));
}

#[test]
fn frame_clamps_time_past_the_end() {
    seekline()
        .args(["frame", "a.ogg", "-d", "10", "-t", "99", "-w", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill  0,0 20x1 linear"));
}

#[test]
fn frame_ansi_prints_one_line_per_row() {
    let output = seekline()
        .args(["frame", "a.ogg", "-d", "10", "-w", "8", "--height", "2", "--ansi"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches('\n').count(), 2);
    assert!(stdout.contains("\x1b["));
}

#[test]
fn frame_rejects_bad_highlight() {
    seekline()
        .args(["frame", "a.ogg", "-d", "10", "--highlight", "8:5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ends before it starts"));
}

#[test]
fn frame_rejects_negative_duration() {
    seekline()
        .args(["frame", "a.ogg", "--duration=-5", "-w", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration"));
}

#[test]
fn frame_requires_duration() {
    let (_stdout, stderr, exit_code) = run_seekline(&["frame", "a.ogg"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--duration"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_loaded_file() {
    let (_temp_dir, path) = temp_fixture("widget.json");
    seekline()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("source = \"lecture.mp3\""))
        .stdout(predicate::str::contains("skip_amount_seconds = 5.0"));
}

#[test]
fn config_show_without_file_prints_defaults() {
    let home = TempDir::new().unwrap();
    seekline()
        .args(["config", "show"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .assert()
        .success()
        .stdout(predicate::str::contains("skip_amount_seconds = 10.0"))
        .stderr(predicate::str::contains("showing defaults"));
}

#[test]
fn config_show_reports_missing_explicit_file() {
    seekline()
        .args(["config", "show", "--config", "/nonexistent/widget.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/widget.toml"));
}

// ============================================================================
// Other Commands
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    seekline()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seekline"));
}

#[test]
fn play_refuses_non_interactive_output() {
    seekline()
        .args(["play", "a.ogg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
