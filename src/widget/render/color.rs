//! Colors and fill styles understood by drawing surfaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// Parsed from the CSS-like strings the host configuration uses:
/// `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
/// where `a` is a 0..=1 float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color '{input}': {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    fn parse_hex(input: &str, hex: &str) -> Result<Self, ColorParseError> {
        let err = |reason| ColorParseError {
            input: input.to_string(),
            reason,
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err("expected hex digits"));
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err("expected hex digits"));
        let nibble = |s: &str| byte(s).map(|v| v * 17);

        match hex.len() {
            3 => Ok(Color::rgb(
                nibble(&hex[0..1])?,
                nibble(&hex[1..2])?,
                nibble(&hex[2..3])?,
            )),
            6 => Ok(Color::rgb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Ok(Color::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => Err(err("expected 3, 6 or 8 hex digits")),
        }
    }

    fn parse_function(input: &str, args: &str, with_alpha: bool) -> Result<Self, ColorParseError> {
        let err = |reason| ColorParseError {
            input: input.to_string(),
            reason,
        };
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(err("wrong number of components"));
        }

        let channel = |s: &str| s.parse::<u8>().map_err(|_| err("channel must be 0-255"));
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if with_alpha {
            let alpha: f64 = parts[3].parse().map_err(|_| err("alpha must be a number"))?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(err("alpha must be between 0 and 1"));
            }
            (alpha * 255.0).round() as u8
        } else {
            255
        };
        Ok(Color::rgba(r, g, b, a))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(input, hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            return Self::parse_function(input, args, true);
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            return Self::parse_function(input, args, false);
        }

        Err(ColorParseError {
            input: input.to_string(),
            reason: "expected #hex, rgb() or rgba()",
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

/// One stop of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient axis, 0..=1
    pub offset: f64,
    pub color: Color,
}

/// A linear gradient between two points in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Stops sorted by offset
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Add a stop, keeping stops ordered by offset.
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let idx = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(idx, ColorStop { offset, color });
        self
    }

    /// Color at a point, projecting it onto the gradient axis.
    ///
    /// Points before the first stop take the first stop's color, points
    /// past the last stop take the last one. A zero-length axis yields
    /// the last stop.
    pub fn color_at(&self, x: f64, y: f64) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        let (dx, dy) = (self.x1 - self.x0, self.y1 - self.y0);
        let len_sq = dx * dx + dy * dy;
        if len_sq <= 0.0 {
            return Some(last.color);
        }
        let t = (((x - self.x0) * dx + (y - self.y0) * dy) / len_sq).clamp(0.0, 1.0);

        if t <= first.offset {
            return Some(first.color);
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return Some(b.color);
                }
                return Some(a.color.lerp(b.color, (t - a.offset) / span));
            }
        }
        Some(last.color)
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear({},{} -> {},{};",
            self.x0, self.y0, self.x1, self.y1
        )?;
        for stop in &self.stops {
            write!(f, " {}:{}", stop.offset, stop.color)?;
        }
        write!(f, ")")
    }
}

/// Fill style for a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Linear(LinearGradient),
}

impl Fill {
    /// Color of this fill at a point.
    pub fn color_at(&self, x: f64, y: f64) -> Option<Color> {
        match self {
            Fill::Solid(color) => Some(*color),
            Fill::Linear(gradient) => gradient.color_at(x, y),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Solid(color) => write!(f, "{}", color),
            Fill::Linear(gradient) => write!(f, "{}", gradient),
        }
    }
}
