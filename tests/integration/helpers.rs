//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use seekline::widget::clock::SimulatedSource;
use seekline::widget::render::RecordingSurface;
use seekline::widget::{Dimension, WidgetController};
use seekline::WidgetConfig;
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while
/// the path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// Run the seekline binary and capture (stdout, stderr, exit code).
pub fn run_seekline(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_seekline"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute seekline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A widget attached to a loaded simulated source and a laid-out
/// recording surface, with the initial events applied.
pub fn ready_widget(
    config: WidgetConfig,
    duration: f64,
    width: u32,
    height: u32,
) -> WidgetController<SimulatedSource, RecordingSurface> {
    let mut source = SimulatedSource::new();
    source.load(duration);

    let mut widget = WidgetController::new(config);
    widget
        .attach(source, RecordingSurface::new(Dimension::new(width, height)))
        .expect("Fresh widget should attach");
    widget.pump();
    widget
}
