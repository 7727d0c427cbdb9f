//! Full-frame render pipeline for the timeline track.
//!
//! Paint order, back to front: clear, track background, highlight
//! bands in set order, progress fill. Every frame is redrawn from
//! scratch; geometry is derived from the inputs each time and never
//! cached.

use super::color::{Color, Fill, LinearGradient};
use super::surface::{DrawingSurface, Rect};
use crate::config::ColorOverrides;
use crate::widget::highlight::{HighlightRegion, HighlightSet};
use crate::widget::mapper::TimeScale;
use crate::widget::state::{Dimension, PlaybackState};

/// Track background when no override is configured.
pub const DEFAULT_TRACK_COLOR: Color = Color::rgb(0xeb, 0xed, 0xf0);

/// Highlight band color when neither the region nor the config sets one.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::rgb(0xff, 0xd9, 0x00);

/// Stops of the fallback progress gradient (cold to warm).
pub const PROGRESS_GRADIENT_STOPS: [(f64, Color); 3] = [
    (0.0, Color::rgb(37, 24, 126)),
    (0.47, Color::rgb(55, 125, 255)),
    (1.0, Color::rgb(0, 171, 195)),
];

/// Narrowest band a highlight is drawn with, in pixels.
pub const MIN_HIGHLIGHT_WIDTH: f64 = 1.0;

/// Draws frames with a fixed set of color overrides.
#[derive(Debug, Clone, Default)]
pub struct RenderPipeline {
    colors: ColorOverrides,
}

impl RenderPipeline {
    pub fn new(colors: ColorOverrides) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &ColorOverrides {
        &self.colors
    }

    /// Redraw the whole frame.
    ///
    /// # Arguments
    /// * `surface` - Surface to paint on
    /// * `dimension` - Current track size in pixels
    /// * `state` - Playback state to visualize
    /// * `highlights` - Regions to band over the track
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        dimension: Dimension,
        state: &PlaybackState,
        highlights: &HighlightSet,
    ) {
        let track = Rect::from_dimension(dimension);
        let scale = TimeScale::new(state.duration, dimension.width);

        surface.clear_rect(track);
        surface.fill_rect(track, &Fill::Solid(self.track_color()));

        for region in highlights {
            let rect = highlight_rect(region, &scale, dimension.height);
            surface.fill_rect(rect, &Fill::Solid(self.highlight_color(region)));
        }

        surface.fill_rect(slider_rect(state, dimension), &self.progress_fill(dimension));

        tracing::trace!(
            width = dimension.width,
            height = dimension.height,
            time = state.current_time,
            duration = state.duration,
            highlights = highlights.len(),
            "frame rendered"
        );
    }

    pub fn track_color(&self) -> Color {
        self.colors.track.unwrap_or(DEFAULT_TRACK_COLOR)
    }

    /// Region color, else the configured default, else the built-in one.
    pub fn highlight_color(&self, region: &HighlightRegion) -> Color {
        region
            .color()
            .or(self.colors.highlight_default)
            .unwrap_or(DEFAULT_HIGHLIGHT_COLOR)
    }

    /// Configured progress color, else the fallback gradient.
    pub fn progress_fill(&self, dimension: Dimension) -> Fill {
        match self.colors.progress {
            Some(color) => Fill::Solid(color),
            None => Fill::Linear(default_progress_gradient(dimension)),
        }
    }
}

/// Progress fill geometry: from the track start to the current time.
pub fn slider_rect(state: &PlaybackState, dimension: Dimension) -> Rect {
    let scale = TimeScale::new(state.duration, dimension.width);
    Rect::new(
        0.0,
        0.0,
        scale.offset(state.current_time),
        f64::from(dimension.height),
    )
}

/// Band geometry for one region, never narrower than one pixel.
pub fn highlight_rect(region: &HighlightRegion, scale: &TimeScale, height: u32) -> Rect {
    let width = scale
        .span(region.start_time(), region.end_time())
        .max(MIN_HIGHLIGHT_WIDTH);
    Rect::new(
        scale.offset(region.start_time()),
        0.0,
        width,
        f64::from(height),
    )
}

/// Diagonal gradient spanning the whole track.
pub fn default_progress_gradient(dimension: Dimension) -> LinearGradient {
    PROGRESS_GRADIENT_STOPS.iter().fold(
        LinearGradient::new(
            0.0,
            0.0,
            f64::from(dimension.width),
            f64::from(dimension.height),
        ),
        |gradient, (offset, color)| gradient.with_stop(*offset, *color),
    )
}
