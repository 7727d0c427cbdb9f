//! Widget configuration
//!
//! Everything the host supplies to the widget: the source locator,
//! highlight regions, skip amount, label format, layout position and
//! color overrides. Style and class-name overrides are carried through
//! untouched for hosts that use them.
//!
//! Files are TOML by default; a `.json` extension selects JSON. Keys are
//! snake_case, with camelCase aliases for configs written for web hosts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::widget::highlight::{HighlightRegion, HighlightSet};
use crate::widget::render::Color;

/// Skip distance used when none (or a nonsensical one) is configured.
pub const DEFAULT_SKIP_SECONDS: f64 = 10.0;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Where the timeline sits relative to the playback controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelinePosition {
    Top,
    #[default]
    Bottom,
}

/// Color overrides for the drawn roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorOverrides {
    /// Track background
    #[serde(default, alias = "sliderTrack", skip_serializing_if = "Option::is_none")]
    pub track: Option<Color>,
    /// Progress fill (replaces the default gradient)
    #[serde(default, alias = "slider", skip_serializing_if = "Option::is_none")]
    pub progress: Option<Color>,
    /// Highlight bands without their own color
    #[serde(
        default,
        alias = "highlightDefault",
        alias = "timestamps",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight_default: Option<Color>,
}

/// Full widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Locator of the audio to play
    pub source: String,

    #[serde(default, alias = "highlightRegions", alias = "timestamps")]
    pub highlight_regions: Vec<HighlightRegion>,

    #[serde(
        default = "default_skip",
        alias = "skipAmountSeconds",
        alias = "skipSeconds"
    )]
    pub skip_amount_seconds: f64,

    #[serde(default, alias = "showHours")]
    pub show_hours: bool,

    #[serde(default, alias = "timelinePosition")]
    pub timeline_position: TimelinePosition,

    #[serde(default, alias = "colorOverrides")]
    pub colors: ColorOverrides,

    #[serde(default, alias = "styleOverrides", skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,

    #[serde(
        default,
        alias = "classNameOverrides",
        alias = "classNames",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub class_names: BTreeMap<String, String>,
}

fn default_skip() -> f64 {
    DEFAULT_SKIP_SECONDS
}

impl WidgetConfig {
    /// Config for `source` with every option at its default.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            highlight_regions: Vec::new(),
            skip_amount_seconds: DEFAULT_SKIP_SECONDS,
            show_hours: false,
            timeline_position: TimelinePosition::default(),
            colors: ColorOverrides::default(),
            styles: BTreeMap::new(),
            class_names: BTreeMap::new(),
        }
    }

    /// Load from a file: JSON for `.json`, TOML otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            highlights = config.highlight_regions.len(),
            "loaded widget config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Default config file location: `<config dir>/seekline/widget.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("seekline").join("widget.toml"))
    }

    /// Skip distance to use for the skip controls.
    ///
    /// Zero, negative and non-finite values fall back to 10 seconds.
    pub fn effective_skip(&self) -> f64 {
        if self.skip_amount_seconds.is_finite() && self.skip_amount_seconds > 0.0 {
            self.skip_amount_seconds
        } else {
            if self.skip_amount_seconds != 0.0 {
                tracing::warn!(
                    configured = self.skip_amount_seconds,
                    "ignoring invalid skip amount"
                );
            }
            DEFAULT_SKIP_SECONDS
        }
    }

    /// Highlight regions as an immutable set.
    pub fn highlight_set(&self) -> HighlightSet {
        HighlightSet::from(self.highlight_regions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_uses_defaults() {
        let config = WidgetConfig::new("song.ogg");
        assert_eq!(config.source, "song.ogg");
        assert_eq!(config.skip_amount_seconds, 10.0);
        assert!(!config.show_hours);
        assert_eq!(config.timeline_position, TimelinePosition::Bottom);
        assert_eq!(config.colors, ColorOverrides::default());
    }

    #[test]
    fn minimal_toml_only_needs_source() {
        let config = WidgetConfig::from_toml_str(r#"source = "a.mp3""#).unwrap();
        assert_eq!(config, WidgetConfig::new("a.mp3"));
    }

    #[test]
    fn missing_source_is_an_error() {
        let err = WidgetConfig::from_toml_str("show_hours = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn parses_full_toml() {
        let config = WidgetConfig::from_toml_str(
            r##"
source = "talk.ogg"
skip_amount_seconds = 15.0
show_hours = true
timeline_position = "top"

[colors]
track = "#222222"
progress = "rgb(0, 200, 0)"
highlight_default = "#ff00ff"

[[highlight_regions]]
start_time = 10.0
end_time = 12.5
label = "question"

[[highlight_regions]]
start_time = 40.0
end_time = 41.0
color = "#00ffff"
"##,
        )
        .unwrap();

        assert_eq!(config.skip_amount_seconds, 15.0);
        assert!(config.show_hours);
        assert_eq!(config.timeline_position, TimelinePosition::Top);
        assert_eq!(config.colors.track, Some(Color::rgb(0x22, 0x22, 0x22)));
        assert_eq!(config.colors.progress, Some(Color::rgb(0, 200, 0)));
        assert_eq!(config.highlight_regions.len(), 2);
        assert_eq!(config.highlight_regions[0].label(), Some("question"));
        assert_eq!(
            config.highlight_regions[1].color(),
            Some(Color::rgb(0, 255, 255))
        );
    }

    #[test]
    fn accepts_camel_case_json() {
        let config = WidgetConfig::from_json_str(
            r##"{
                "source": "clip.wav",
                "skipSeconds": 5,
                "showHours": true,
                "timelinePosition": "top",
                "timestamps": [{"startTime": 1, "endTime": 2}],
                "colorOverrides": {"sliderTrack": "#000", "slider": "#fff", "timestamps": "#f00"},
                "classNames": {"timeText": "label"}
            }"##,
        )
        .unwrap();

        assert_eq!(config.skip_amount_seconds, 5.0);
        assert_eq!(config.highlight_regions.len(), 1);
        assert_eq!(config.colors.track, Some(Color::rgb(0, 0, 0)));
        assert_eq!(config.colors.progress, Some(Color::rgb(255, 255, 255)));
        assert_eq!(config.colors.highlight_default, Some(Color::rgb(255, 0, 0)));
        assert_eq!(config.class_names.get("timeText").map(String::as_str), Some("label"));
    }

    #[test]
    fn invalid_region_fails_to_load() {
        let result = WidgetConfig::from_toml_str(
            r#"
source = "x"
[[highlight_regions]]
start_time = 5.0
end_time = 1.0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_color_fails_to_load() {
        let result = WidgetConfig::from_toml_str(
            r#"
source = "x"
[colors]
track = "blue-ish"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn effective_skip_falls_back_for_nonsense() {
        let mut config = WidgetConfig::new("x");
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            config.skip_amount_seconds = bad;
            assert_eq!(config.effective_skip(), DEFAULT_SKIP_SECONDS);
        }
        config.skip_amount_seconds = 2.5;
        assert_eq!(config.effective_skip(), 2.5);
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let mut config = WidgetConfig::new("a.ogg");
        config.show_hours = true;
        config.colors.track = Some(Color::rgb(1, 2, 3));
        config.highlight_regions = vec![HighlightRegion::new(1.0, 2.0).unwrap().with_label("x")];

        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(WidgetConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn highlight_set_keeps_order() {
        let mut config = WidgetConfig::new("a.ogg");
        config.highlight_regions = vec![
            HighlightRegion::new(5.0, 6.0).unwrap(),
            HighlightRegion::new(1.0, 2.0).unwrap(),
        ];
        let set = config.highlight_set();
        assert_eq!(set.regions()[0].start_time(), 5.0);
        assert_eq!(set.regions()[1].start_time(), 1.0);
    }
}
