//! Terminal drawing surface backed by a ratatui buffer.
//!
//! One cell is one pixel. A rectangle covers a cell when the cell's
//! center lies inside it, so fractional geometry from the pipeline maps
//! onto whole cells the way a rasterizer would sample pixel centers.
//! Fills set the cell background; gradients are sampled per cell.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;

use super::color::Fill;
use super::surface::{BoundingBox, DrawingSurface, Rect};
use crate::widget::state::Dimension;

/// Cell-based surface the terminal host places inside its layout.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    /// Where the host laid the surface out, in terminal cells
    area: Option<Area>,
    /// Backing store in surface-local cells
    buffer: Buffer,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            area: None,
            buffer: Buffer::empty(Area::default()),
        }
    }

    /// Record the area the host layout assigned to the track.
    pub fn set_area(&mut self, area: Area) {
        self.area = Some(area);
    }

    pub fn area(&self) -> Option<Area> {
        self.area
    }

    /// Backing store contents, in surface-local coordinates.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Copy the backing store into a frame buffer at the laid-out area.
    ///
    /// Cells outside `dst` are skipped.
    pub fn blit(&self, dst: &mut Buffer) {
        let Some(area) = self.area else {
            return;
        };
        let local = self.buffer.area;
        for y in 0..local.height.min(area.height) {
            for x in 0..local.width.min(area.width) {
                let (Some(src), Some(out)) = (
                    self.buffer.cell((x, y)),
                    dst.cell_mut((area.x + x, area.y + y)),
                ) else {
                    continue;
                };
                out.set_bg(src.bg);
            }
        }
    }

    /// Cells whose centers fall inside `rect`, clipped to the buffer.
    fn covered_cells(&self, rect: Rect) -> impl Iterator<Item = (u16, u16)> {
        let local = self.buffer.area;
        let columns = center_span(rect.x, rect.width, local.width);
        let rows = center_span(rect.y, rect.height, local.height);
        rows.flat_map(move |y| columns.clone().map(move |x| (x, y)))
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Indices `i` in `0..limit` with `start <= i + 0.5 < start + len`.
fn center_span(start: f64, len: f64, limit: u16) -> std::ops::Range<u16> {
    if len.is_nan() || len <= 0.0 {
        return 0..0;
    }
    let first = (start - 0.5).ceil().max(0.0);
    let end = (start + len - 0.5).ceil().clamp(0.0, f64::from(limit));
    if first >= end {
        return 0..0;
    }
    first as u16..end as u16
}

impl DrawingSurface for TerminalSurface {
    fn layout_size(&self) -> Option<Dimension> {
        self.area
            .map(|area| Dimension::new(u32::from(area.width), u32::from(area.height)))
    }

    fn backing_size(&self) -> Dimension {
        let area = self.buffer.area;
        Dimension::new(u32::from(area.width), u32::from(area.height))
    }

    fn set_backing_size(&mut self, size: Dimension) {
        let width = u16::try_from(size.width).unwrap_or(u16::MAX);
        let height = u16::try_from(size.height).unwrap_or(u16::MAX);
        self.buffer = Buffer::empty(Area::new(0, 0, width, height));
    }

    fn bounding_box(&self) -> BoundingBox {
        self.area
            .map(|area| BoundingBox {
                left: f64::from(area.x),
                top: f64::from(area.y),
                width: f64::from(area.width),
                height: f64::from(area.height),
            })
            .unwrap_or_default()
    }

    fn clear_rect(&mut self, rect: Rect) {
        let cells: Vec<_> = self.covered_cells(rect).collect();
        for position in cells {
            if let Some(cell) = self.buffer.cell_mut(position) {
                cell.reset();
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        let cells: Vec<_> = self.covered_cells(rect).collect();
        for (x, y) in cells {
            let Some(color) = fill.color_at(f64::from(x) + 0.5, f64::from(y) + 0.5) else {
                continue;
            };
            if let Some(cell) = self.buffer.cell_mut((x, y)) {
                cell.set_bg(color.into());
            }
        }
    }
}
