//! Time labels shown next to the track.

use chrono::NaiveTime;

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a playback time as a clock reading.
///
/// `HH:MM:SS` when `show_hours` is set, else `MM:SS`. The reading is a
/// time of day: minutes wrap at the hour in `MM:SS` and hours wrap at 24.
/// Fractions are truncated; negative, NaN and infinite inputs render as
/// zero.
///
/// # Examples
///
/// ```
/// use seekline::widget::format::format_time;
///
/// assert_eq!(format_time(65.0, false), "01:05");
/// assert_eq!(format_time(3725.0, true), "01:02:05");
/// ```
pub fn format_time(seconds: f64, show_hours: bool) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64 % SECONDS_PER_DAY
    } else {
        0
    };
    let pattern = if show_hours { "%H:%M:%S" } else { "%M:%S" };

    // whole < 86_400, always a valid time of day
    match NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, 0) {
        Some(time) => time.format(pattern).to_string(),
        None if show_hours => "00:00:00".to_string(),
        None => "00:00".to_string(),
    }
}
