//! Pointer input for the timeline.
//!
//! Translates a pointer activation in client coordinates into a seek
//! target. The hit test uses strict inequality on all four edges of the
//! track, so a press exactly on the boundary is a miss.

mod mouse;

pub use mouse::pointer_from_mouse;

use crate::widget::mapper::offset_to_time;
use crate::widget::render::{BoundingBox, Rect};
use crate::widget::state::Dimension;

/// A pointer activation (click/press) in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Position relative to the surface's top-left corner.
    pub fn local(&self, bounds: &BoundingBox) -> (f64, f64) {
        (self.client_x - bounds.left, self.client_y - bounds.top)
    }
}

/// Result of resolving a pointer activation against the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Inside the track: seek to this time (seconds, within `[0, duration]`)
    Seek(f64),
    /// Outside the track; ignored
    Miss,
}

/// Resolve a pointer activation into a seek target.
///
/// # Arguments
/// * `pointer` - Activation in client coordinates
/// * `bounds` - Surface bounding box in client coordinates
/// * `dimension` - Current track size
/// * `duration` - Track duration (seconds, 0 while unknown)
pub fn resolve_pointer(
    pointer: PointerEvent,
    bounds: &BoundingBox,
    dimension: Dimension,
    duration: f64,
) -> PointerOutcome {
    let (x, y) = pointer.local(bounds);
    let track = Rect::from_dimension(dimension);

    if !track.contains_strict(x, y) {
        tracing::trace!(x, y, "pointer outside track");
        return PointerOutcome::Miss;
    }

    let time = offset_to_time(x, duration, track.width);
    PointerOutcome::Seek(time.clamp(0.0, duration.max(0.0)))
}
