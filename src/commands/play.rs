//! Interactive playback in the terminal

use anyhow::{bail, Result};
use seekline::tui::run_player;
use seekline::widget::highlight::HighlightRegion;
use seekline::{TimelinePosition, WidgetConfig};

/// Command-line overrides layered on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct PlayOverrides {
    pub highlights: Vec<HighlightRegion>,
    pub skip: Option<f64>,
    pub show_hours: bool,
    pub top: bool,
}

impl PlayOverrides {
    /// Apply the overrides. Highlights given on the command line are
    /// appended after the configured ones.
    pub fn apply(self, mut config: WidgetConfig) -> WidgetConfig {
        config.highlight_regions.extend(self.highlights);
        if let Some(skip) = self.skip {
            config.skip_amount_seconds = skip;
        }
        if self.show_hours {
            config.show_hours = true;
        }
        if self.top {
            config.timeline_position = TimelinePosition::Top;
        }
        config
    }
}

/// Run the interactive player.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: WidgetConfig, duration: f64) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The player needs an interactive terminal; use `seekline frame` for scripted output");
    }
    if !duration.is_finite() || duration <= 0.0 {
        bail!("Duration must be a positive number of seconds");
    }

    tracing::info!(
        source = %config.source,
        duration,
        highlights = config.highlight_regions.len(),
        "starting player"
    );
    run_player(config, duration)
}
