//! Time <-> pixel mapping for the track.
//!
//! The mapping is linear and unclamped. Degenerate geometry (unknown
//! duration, zero width) maps to 0 instead of dividing by zero.

/// Convert a playback time to a horizontal offset on the track.
///
/// # Arguments
/// * `time` - Playback time in seconds
/// * `duration` - Track duration in seconds (0 while unknown)
/// * `width` - Track width in pixels
///
/// # Returns
/// `time / duration * width`, or 0 when the duration is not positive
#[inline]
pub fn time_to_offset(time: f64, duration: f64, width: f64) -> f64 {
    if duration > 0.0 {
        (time / duration) * width
    } else {
        0.0
    }
}

/// Convert a horizontal track offset back to a playback time.
///
/// Callers must clamp the result to `[0, duration]` before seeking,
/// since pointer offsets may fall outside the track.
///
/// # Returns
/// `offset / width * duration`, or 0 when the width is not positive
#[inline]
pub fn offset_to_time(offset: f64, duration: f64, width: f64) -> f64 {
    if width > 0.0 {
        (offset / width) * duration
    } else {
        0.0
    }
}

/// Time scale for one frame: a duration spread over a pixel width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub duration: f64,
    pub width: f64,
}

impl TimeScale {
    pub fn new(duration: f64, width: u32) -> Self {
        Self {
            duration,
            width: f64::from(width),
        }
    }

    pub fn offset(&self, time: f64) -> f64 {
        time_to_offset(time, self.duration, self.width)
    }

    pub fn time(&self, offset: f64) -> f64 {
        offset_to_time(offset, self.duration, self.width)
    }

    /// Pixel width of the span between two times.
    pub fn span(&self, start: f64, end: f64) -> f64 {
        self.offset(end) - self.offset(start)
    }
}
