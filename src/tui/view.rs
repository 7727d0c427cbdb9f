//! Layout and chrome for the terminal player.
//!
//! The track area is handed to the widget's `TerminalSurface`; this
//! module draws everything around it: title, time labels, control
//! glyphs and the status line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::Theme;
use crate::config::TimelinePosition;
use crate::widget::clock::PlaybackSource;
use crate::widget::format::format_time;
use crate::widget::render::TerminalSurface;
use crate::widget::WidgetController;

/// Width reserved for a time label (`HH:MM:SS` plus padding).
const LABEL_WIDTH_HOURS: u16 = 10;
/// Width reserved for a time label (`MM:SS` plus padding).
const LABEL_WIDTH: u16 = 7;

/// Screen regions of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub title: Rect,
    pub controls: Rect,
    pub elapsed: Rect,
    pub track: Rect,
    pub total: Rect,
    pub status: Rect,
}

impl PlayerLayout {
    /// Split `area` into player regions.
    ///
    /// The timeline row goes above or below the controls per `position`.
    pub fn compute(area: Rect, position: TimelinePosition, show_hours: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let (timeline_row, controls) = match position {
            TimelinePosition::Top => (rows[2], rows[3]),
            TimelinePosition::Bottom => (rows[3], rows[2]),
        };

        let label = if show_hours {
            LABEL_WIDTH_HOURS
        } else {
            LABEL_WIDTH
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(label),
                Constraint::Min(1),
                Constraint::Length(label),
            ])
            .split(timeline_row);

        Self {
            title: rows[0],
            controls,
            elapsed: columns[0],
            track: columns[1],
            total: columns[2],
            status: rows[4],
        }
    }
}

/// Chrome around the track for one frame.
pub struct PlayerView<'a, P: PlaybackSource> {
    pub widget: &'a WidgetController<P, TerminalSurface>,
    pub layout: PlayerLayout,
    pub theme: &'a Theme,
}

impl<P: PlaybackSource> PlayerView<'_, P> {
    fn status_line(&self) -> Line<'static> {
        let state = self.widget.state();
        let labels: Vec<&str> = self
            .widget
            .highlights()
            .active_at(state.current_time)
            .filter_map(|region| region.label())
            .collect();

        let mut spans = Vec::new();
        if !labels.is_empty() {
            spans.push(Span::styled(
                format!("◆ {}  ", labels.join(", ")),
                self.theme.accent_bold_style(),
            ));
        }
        spans.push(Span::styled(
            "space:play/pause  ←/→:skip  click:seek  q:quit".to_string(),
            self.theme.text_secondary_style(),
        ));
        Line::from(spans)
    }

    fn controls_line(&self) -> Line<'static> {
        let play = if self.widget.state().is_paused {
            "▶"
        } else {
            "⏸"
        };
        let skip = format!("{}s", self.widget.config().effective_skip());
        Line::from(vec![
            Span::styled(format!("⏮ -{}   ", skip), self.theme.text_secondary_style()),
            Span::styled(play.to_string(), self.theme.accent_bold_style()),
            Span::styled(format!("   +{} ⏭", skip), self.theme.text_secondary_style()),
        ])
    }
}

impl<P: PlaybackSource> Widget for PlayerView<'_, P> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let state = self.widget.state();
        let show_hours = self.widget.config().show_hours;

        Paragraph::new(self.widget.config().source.clone())
            .style(self.theme.text_style())
            .render(self.layout.title, buf);

        Paragraph::new(format_time(state.current_time, show_hours))
            .style(self.theme.text_style())
            .alignment(Alignment::Center)
            .render(self.layout.elapsed, buf);

        Paragraph::new(format_time(state.duration, show_hours))
            .style(self.theme.text_style())
            .alignment(Alignment::Center)
            .render(self.layout.total, buf);

        Paragraph::new(self.controls_line())
            .alignment(Alignment::Center)
            .render(self.layout.controls, buf);

        Paragraph::new(self.status_line()).render(self.layout.status, buf);

        if let Some(surface) = self.widget.surface() {
            surface.blit(buf);
        }
    }
}
