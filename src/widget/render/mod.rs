//! Rendering for the timeline track.
//!
//! This module contains the drawing surface abstraction, the colors and
//! fills surfaces understand, the render pipeline, and two surfaces:
//! a ratatui-backed terminal surface and a display-list recorder.

mod color;
mod pipeline;
mod recording;
mod surface;
mod terminal;

pub use color::{Color, ColorParseError, ColorStop, Fill, LinearGradient};
pub use pipeline::{
    default_progress_gradient, highlight_rect, slider_rect, RenderPipeline,
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_TRACK_COLOR, MIN_HIGHLIGHT_WIDTH, PROGRESS_GRADIENT_STOPS,
};
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{BoundingBox, DrawingSurface, Rect};
pub use terminal::TerminalSurface;
