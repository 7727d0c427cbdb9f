//! Terminal host for the timeline widget
//!
//! Lays the track out between time labels and playback controls using
//! ratatui/crossterm, and feeds terminal input back into the widget.

pub mod app;
pub mod theme;
pub mod view;

pub use app::{run_player, InputResult, PlayerApp};
pub use theme::Theme;
pub use view::{PlayerLayout, PlayerView};
