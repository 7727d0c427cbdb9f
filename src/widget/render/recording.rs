//! Display-list surface.
//!
//! Records every draw call instead of rasterizing. Backs the `frame`
//! command and lets tests assert on exact geometry and paint order.

use std::fmt;

use super::color::Fill;
use super::surface::{BoundingBox, DrawingSurface, Rect};
use crate::widget::state::Dimension;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { rect: Rect },
    Fill { rect: Rect, fill: Fill },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Clear { rect } => write!(f, "clear {}", rect),
            DrawOp::Fill { rect, fill } => write!(f, "fill  {} {}", rect, fill),
        }
    }
}

/// Surface that keeps the draw calls of the latest frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    layout: Option<Dimension>,
    backing: Dimension,
    origin: (f64, f64),
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// A surface already laid out at `size`, placed at the client origin.
    pub fn new(size: Dimension) -> Self {
        Self {
            layout: Some(size),
            backing: Dimension::default(),
            origin: (0.0, 0.0),
            ops: Vec::new(),
        }
    }

    /// A surface the host has not laid out yet.
    pub fn unlaid() -> Self {
        Self {
            layout: None,
            ..Self::new(Dimension::default())
        }
    }

    /// Place the surface at a client-coordinate origin.
    pub fn at(mut self, left: f64, top: f64) -> Self {
        self.origin = (left, top);
        self
    }

    /// Simulate the host layout changing the surface size.
    pub fn set_layout_size(&mut self, size: Dimension) {
        self.layout = Some(size);
    }

    /// Draw calls since the last clear of the whole surface.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Display list, one call per line.
    pub fn display_list(&self) -> String {
        self.ops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawingSurface for RecordingSurface {
    fn layout_size(&self) -> Option<Dimension> {
        self.layout
    }

    fn backing_size(&self) -> Dimension {
        self.backing
    }

    fn set_backing_size(&mut self, size: Dimension) {
        self.backing = size;
        self.ops.clear();
    }

    fn bounding_box(&self) -> BoundingBox {
        let size = self.layout.unwrap_or_default();
        BoundingBox {
            left: self.origin.0,
            top: self.origin.1,
            width: f64::from(size.width),
            height: f64::from(size.height),
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        // A full clear starts a new frame
        if rect == Rect::from_dimension(self.backing) {
            self.ops.clear();
        }
        self.ops.push(DrawOp::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        self.ops.push(DrawOp::Fill {
            rect,
            fill: fill.clone(),
        });
    }
}
