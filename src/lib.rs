//! seekline - embeddable audio timeline widget
//!
//! The crate is split into an engine and its hosts:
//!
//! - `widget`: the timeline rendering and seek synchronization engine
//!   (clock, coordinate mapping, highlights, render pipeline, input, controller)
//! - `config`: widget configuration loaded from TOML or JSON
//! - `cli`: command-line definitions shared by the binary and `xtask`
//! - `tui`: terminal host embedding the widget via ratatui/crossterm
//!
//! # Usage
//!
//! ```
//! use seekline::widget::clock::SimulatedSource;
//! use seekline::widget::render::RecordingSurface;
//! use seekline::widget::{Dimension, WidgetController};
//! use seekline::WidgetConfig;
//!
//! let mut widget = WidgetController::new(WidgetConfig::new("track.ogg"));
//! let surface = RecordingSurface::new(Dimension::new(1000, 20));
//! let mut source = SimulatedSource::new();
//! source.load(200.0);
//!
//! widget.attach(source, surface).unwrap();
//! widget.pump();
//! assert_eq!(widget.state().duration, 200.0);
//! ```

pub mod cli;
pub mod config;
pub mod tui;
pub mod widget;

pub use config::{ColorOverrides, ConfigError, TimelinePosition, WidgetConfig};
pub use widget::{Dimension, PlaybackState, WidgetController, WidgetPhase};
