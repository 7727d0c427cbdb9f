//! DrawingSurface trait and geometry types.

use std::fmt;

use super::color::Fill;
use crate::widget::state::Dimension;

/// Axis-aligned rectangle in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole surface of the given size.
    pub fn from_dimension(dimension: Dimension) -> Self {
        Self::new(
            0.0,
            0.0,
            f64::from(dimension.width),
            f64::from(dimension.height),
        )
    }

    /// Strict interior test: points on an edge are outside.
    pub fn contains_strict(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Position of a surface in client (pointer) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D surface the render pipeline can paint on.
///
/// Only the widget controller drives a surface; the pipeline draws when
/// the controller invokes it and the input handler only reads geometry.
pub trait DrawingSurface {
    /// Size the surface currently occupies in the host layout.
    ///
    /// `None` until the host has laid the surface out.
    fn layout_size(&self) -> Option<Dimension>;

    /// Size of the pixel backing store.
    fn backing_size(&self) -> Dimension;

    /// Resize the pixel backing store (discards its contents).
    fn set_backing_size(&mut self, size: Dimension);

    /// Surface bounds in client coordinates, for pointer translation.
    fn bounding_box(&self) -> BoundingBox;

    /// Reset a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Paint a rectangle.
    fn fill_rect(&mut self, rect: Rect, fill: &Fill);
}
