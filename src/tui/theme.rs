//! Theme for the terminal host
//!
//! Colors for everything around the track: labels, control glyphs and
//! the status line. The track itself is colored by the widget config.

use ratatui::style::{Color, Modifier, Style};

/// Host chrome colors.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Time labels and title
    pub text_primary: Color,
    /// Hints and inactive controls
    pub text_secondary: Color,
    /// Active control and highlight labels
    pub accent: Color,
    /// Background behind the chrome
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            background: Color::Reset,
        }
    }
}

impl Theme {
    /// Plain theme for terminals with NO_COLOR set.
    pub fn monochrome() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            background: Color::Reset,
        }
    }

    /// Pick the theme for the current environment.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.background)
    }

    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}
