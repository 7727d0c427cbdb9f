//! Widget state types
//!
//! Contains the playback state mirrored from the source, the measured
//! surface dimension, and the controller lifecycle phase.

use super::clock::PlaybackEvent;

/// Playback state as last reported by the playback source.
///
/// Only the controller mutates this, and only by applying clock events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds
    pub current_time: f64,
    /// Track duration in seconds (0 while unknown)
    pub duration: f64,
    /// Whether playback is paused
    pub is_paused: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            is_paused: true,
        }
    }
}

impl PlaybackState {
    /// Apply a single source event.
    ///
    /// Returns true when the change is visible on the timeline and a
    /// redraw is due. A duration-only change only affects later mappings.
    pub fn apply(&mut self, event: PlaybackEvent) -> bool {
        match event {
            PlaybackEvent::TimeProgressed(time) => {
                self.current_time = sanitize_seconds(time);
                true
            }
            PlaybackEvent::Paused => {
                self.is_paused = true;
                true
            }
            PlaybackEvent::Resumed => {
                self.is_paused = false;
                true
            }
            PlaybackEvent::DurationKnown(duration) => {
                self.duration = sanitize_seconds(duration);
                false
            }
        }
    }

    /// Whether the duration has been reported yet.
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }
}

/// Negative and NaN values collapse to zero. Infinity (live streams) is kept.
fn sanitize_seconds(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Measured pixel size of the track drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero and nothing can be drawn.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Lifecycle phase of a [`WidgetController`](super::WidgetController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// No surface or source attached
    Unmounted,
    /// Attached and subscribed, waiting for the first layout measurement
    Initializing,
    /// Dimension known; every relevant change renders a frame
    Ready,
}
