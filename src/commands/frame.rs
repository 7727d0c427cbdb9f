//! Single-frame rendering for inspection and scripting

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor};
use ratatui::layout::Rect as Area;
use ratatui::style::Color as CellColor;
use seekline::widget::clock::SimulatedSource;
use seekline::widget::render::{DrawingSurface, RecordingSurface, TerminalSurface};
use seekline::widget::{Dimension, WidgetController};
use seekline::WidgetConfig;

/// Width used when none is given and stdout is not a terminal.
const FALLBACK_WIDTH: u32 = 80;

/// Playback position and track geometry for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameRequest {
    pub duration: f64,
    pub time: f64,
    pub width: Option<u32>,
    pub height: u32,
}

impl FrameRequest {
    fn dimension(&self) -> Result<Dimension> {
        let width = self.width.unwrap_or_else(terminal_width);
        if width == 0 || self.height == 0 {
            bail!("Track size must be at least 1x1 (got {}x{})", width, self.height);
        }
        Ok(Dimension::new(width, self.height))
    }

    fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            bail!("Duration must be a non-negative number of seconds");
        }
        if !self.time.is_finite() {
            bail!("Time must be a finite number of seconds");
        }
        Ok(())
    }
}

fn terminal_width() -> u32 {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| u32::from(w))
        .unwrap_or(FALLBACK_WIDTH)
}

/// Print the frame's draw operations, or colored cells with `ansi`.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: WidgetConfig, request: FrameRequest, ansi: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if ansi {
        let surface = render_cells(config, request)?;
        write_cells(&mut stdout, &surface)?;
    } else {
        let list = display_list(config, request)?;
        writeln!(stdout, "{}", list)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Render one frame onto a recording surface and return its display list.
pub fn display_list(config: WidgetConfig, request: FrameRequest) -> Result<String> {
    let surface = RecordingSurface::new(request.dimension()?);
    let surface = render_with(config, request, surface)?;
    Ok(surface.display_list())
}

/// Render one frame onto terminal cells.
pub fn render_cells(config: WidgetConfig, request: FrameRequest) -> Result<TerminalSurface> {
    let dimension = request.dimension()?;
    let width = u16::try_from(dimension.width).context("Width too large for terminal output")?;
    let height = u16::try_from(dimension.height).context("Height too large for terminal output")?;

    let mut surface = TerminalSurface::new();
    surface.set_area(Area::new(0, 0, width, height));
    render_with(config, request, surface)
}

fn render_with<D: DrawingSurface>(
    config: WidgetConfig,
    request: FrameRequest,
    surface: D,
) -> Result<D> {
    request.validate()?;

    let mut source = SimulatedSource::new();
    source.load(request.duration);

    let mut widget = WidgetController::new(config);
    widget.attach(source, surface)?;
    widget.pump();
    widget.seek(request.time);
    widget.pump();

    tracing::debug!(
        time = widget.state().current_time,
        frames = widget.frames_rendered(),
        "frame rendered"
    );

    let (_, surface) = widget
        .detach()
        .context("Widget lost its surface while rendering")?;
    Ok(surface)
}

fn write_cells(out: &mut impl Write, surface: &TerminalSurface) -> Result<()> {
    let buffer = surface.buffer();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            match buffer.cell((x, y)).map(|cell| cell.bg) {
                Some(CellColor::Rgb(r, g, b)) => {
                    queue!(out, SetBackgroundColor(TermColor::Rgb { r, g, b }), Print(' '))?
                }
                _ => queue!(out, ResetColor, Print(' '))?,
            }
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    Ok(())
}
