//! Interactive terminal player.
//!
//! Hosts a `WidgetController` on a `TerminalSurface`, driven by a
//! `SimulatedSource` that advances with wall-clock time. Mouse presses
//! on the track seek; keys toggle playback and skip.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

use super::theme::Theme;
use super::view::{PlayerLayout, PlayerView};
use crate::config::WidgetConfig;
use crate::widget::clock::SimulatedSource;
use crate::widget::input::pointer_from_mouse;
use crate::widget::render::TerminalSurface;
use crate::widget::WidgetController;

/// How long to wait for input before advancing the clock.
const TICK: Duration = Duration::from_millis(50);

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the player
    Quit,
}

/// Terminal player state.
pub struct PlayerApp {
    widget: WidgetController<SimulatedSource, TerminalSurface>,
    theme: Theme,
    last_tick: Instant,
}

impl PlayerApp {
    /// Create a player for a simulated track of `duration` seconds.
    pub fn new(config: WidgetConfig, duration: f64) -> Result<Self> {
        let mut source = SimulatedSource::new();
        source.load(duration);

        let mut widget = WidgetController::new(config);
        widget
            .attach(source, TerminalSurface::new())
            .context("Failed to attach timeline widget")?;
        widget.pump();

        Ok(Self {
            widget,
            theme: Theme::from_env(),
            last_tick: Instant::now(),
        })
    }

    pub fn widget(&self) -> &WidgetController<SimulatedSource, TerminalSurface> {
        &self.widget
    }

    /// Advance the simulated source by `elapsed` and apply its events.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(source) = self.widget.source_mut() {
            source.advance(elapsed);
        }
        self.widget.pump();
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) -> InputResult {
        let result = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_from_mouse(mouse) {
                    self.widget.click(pointer);
                }
                InputResult::Continue
            }
            // Layout is re-measured on the next draw
            _ => InputResult::Continue,
        };
        self.widget.pump();
        result
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        if key.kind != KeyEventKind::Press {
            return InputResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return InputResult::Quit
            }
            KeyCode::Char(' ') | KeyCode::Char('k') => self.widget.toggle_playback(),
            KeyCode::Left | KeyCode::Char('j') => {
                self.widget.skip_backward();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.widget.skip_forward();
            }
            KeyCode::Home => {
                self.widget.seek(0.0);
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Lay out the frame, resize the track surface, and draw.
    pub fn draw(&mut self, frame: &mut Frame) {
        let config = self.widget.config();
        let layout =
            PlayerLayout::compute(frame.area(), config.timeline_position, config.show_hours);

        if let Some(surface) = self.widget.surface_mut() {
            surface.set_area(layout.track);
        }
        self.widget.sync_layout();

        frame.render_widget(
            PlayerView {
                widget: &self.widget,
                layout,
                theme: &self.theme,
            },
            frame.area(),
        );
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK)? && self.handle_event(event::read()?) == InputResult::Quit {
                return Ok(());
            }

            let now = Instant::now();
            self.tick(now.duration_since(self.last_tick));
            self.last_tick = now;
        }
    }
}

/// Run the interactive player until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_player(config: WidgetConfig, duration: f64) -> Result<()> {
    let mut app = PlayerApp::new(config, duration)?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Always restore the terminal, even if the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

    tracing::debug!(frames = app.widget().frames_rendered(), "player closed");
    result
}
