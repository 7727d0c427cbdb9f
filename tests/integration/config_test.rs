//! Integration tests for loading widget configuration files

use seekline::widget::render::Color;
use seekline::{ConfigError, TimelinePosition, WidgetConfig};
use tempfile::TempDir;

use super::helpers::{ready_widget, temp_fixture};

#[test]
fn loads_toml_fixture() {
    let (_temp_dir, path) = temp_fixture("widget.toml");
    let config = WidgetConfig::load(&path).expect("Should load TOML config");

    assert_eq!(config.source, "interview.ogg");
    assert_eq!(config.effective_skip(), 15.0);
    assert!(config.show_hours);
    assert_eq!(config.timeline_position, TimelinePosition::Top);
    assert_eq!(config.colors.track, Some(Color::rgb(0x20, 0x20, 0x20)));
    assert_eq!(config.highlight_regions.len(), 2);
    assert_eq!(config.highlight_regions[1].label(), Some("answer"));
}

#[test]
fn loads_json_fixture_by_extension() {
    let (_temp_dir, path) = temp_fixture("widget.json");
    let config = WidgetConfig::load(&path).expect("Should load JSON config");

    assert_eq!(config.source, "lecture.mp3");
    assert_eq!(config.skip_amount_seconds, 5.0);
    assert_eq!(config.colors.progress, Some(Color::rgb(0x33, 0x66, 0xff)));
    assert_eq!(config.highlight_regions.len(), 2);
    assert_eq!(
        config.class_names.get("container").map(String::as_str),
        Some("player")
    );
}

#[test]
fn missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = WidgetConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ \"source\": ").unwrap();

    assert!(matches!(
        WidgetConfig::load(&path).unwrap_err(),
        ConfigError::Json(_)
    ));
}

#[test]
fn fixture_colors_reach_the_frame() {
    let (_temp_dir, path) = temp_fixture("widget.toml");
    let config = WidgetConfig::load(&path).unwrap();
    let widget = ready_widget(config, 240.0, 240, 1);

    let list = widget.surface().unwrap().display_list();
    let lines: Vec<&str> = list.lines().collect();
    assert_eq!(lines[1], "fill  0,0 240x1 #202020");
    // First region has no color: configured default applies
    assert_eq!(lines[2], "fill  30,0 15x1 #ff8800");
    assert_eq!(lines[3], "fill  120,0 1x1 #00c8ff");
}
