//! Command-line interface definitions
//!
//! Lives in the library so the xtask can build man pages from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::widget::highlight::HighlightRegion;
use crate::widget::render::Color;

/// Audio timeline widget with highlight regions.
#[derive(Debug, Parser)]
#[command(name = "seekline", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a simulated track in the terminal with a clickable timeline
    Play {
        /// Audio source locator shown in the title
        source: String,

        /// Config file (TOML, or JSON by extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Track length in seconds
        #[arg(short, long, default_value_t = 180.0)]
        duration: f64,

        /// Highlight region as START:END[:COLOR[:LABEL]] (repeatable)
        #[arg(long = "highlight", value_parser = parse_highlight)]
        highlights: Vec<HighlightRegion>,

        /// Seconds moved by the skip controls
        #[arg(long)]
        skip: Option<f64>,

        /// Show hours in time labels
        #[arg(long)]
        show_hours: bool,

        /// Place the timeline above the controls
        #[arg(long)]
        top: bool,

        /// Write logs to this file while the player owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Render one frame of the timeline and print its draw operations
    Frame {
        /// Audio source locator
        source: String,

        /// Track length in seconds
        #[arg(short, long)]
        duration: f64,

        /// Playback position in seconds
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Track width in pixels (defaults to the terminal width)
        #[arg(short, long)]
        width: Option<u32>,

        /// Track height in pixels
        #[arg(long, default_value_t = 1)]
        height: u32,

        /// Highlight region as START:END[:COLOR[:LABEL]] (repeatable)
        #[arg(long = "highlight", value_parser = parse_highlight)]
        highlights: Vec<HighlightRegion>,

        /// Config file (TOML, or JSON by extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the frame as colored terminal cells instead
        #[arg(long)]
        ansi: bool,
    },

    /// Inspect widget configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Config file (defaults to the user config location)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Parse `START:END[:COLOR[:LABEL]]` into a highlight region.
///
/// An empty color field keeps the default color, so `5:8::intro` sets
/// only a label. The label may itself contain colons.
pub fn parse_highlight(arg: &str) -> Result<HighlightRegion, String> {
    let mut parts = arg.splitn(4, ':');
    let start = parse_seconds(parts.next(), "start", arg)?;
    let end = parse_seconds(parts.next(), "end", arg)?;

    let mut region = HighlightRegion::new(start, end).map_err(|e| e.to_string())?;

    if let Some(color) = parts.next().filter(|c| !c.is_empty()) {
        let color = color.parse::<Color>().map_err(|e| e.to_string())?;
        region = region.with_color(color);
    }
    if let Some(label) = parts.next().filter(|l| !l.is_empty()) {
        region = region.with_label(label);
    }
    Ok(region)
}

fn parse_seconds(field: Option<&str>, name: &str, arg: &str) -> Result<f64, String> {
    let field = field
        .filter(|f| !f.is_empty())
        .ok_or_else(|| format!("missing {} time in '{}', expected START:END", name, arg))?;
    field
        .trim()
        .parse()
        .map_err(|_| format!("invalid {} time '{}'", name, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_bounds_only() {
        let region = parse_highlight("5:8").unwrap();
        assert_eq!(region.start_time(), 5.0);
        assert_eq!(region.end_time(), 8.0);
        assert_eq!(region.color(), None);
        assert_eq!(region.label(), None);
    }

    #[test]
    fn parses_color_and_label() {
        let region = parse_highlight("1.5:2:#ff0000:chorus: part 2").unwrap();
        assert_eq!(region.color(), Some(Color::rgb(255, 0, 0)));
        assert_eq!(region.label(), Some("chorus: part 2"));
    }

    #[test]
    fn empty_color_keeps_default() {
        let region = parse_highlight("5:8::intro").unwrap();
        assert_eq!(region.color(), None);
        assert_eq!(region.label(), Some("intro"));
    }

    #[test]
    fn rejects_malformed_highlights() {
        assert!(parse_highlight("5").is_err());
        assert!(parse_highlight("a:b").is_err());
        assert!(parse_highlight("8:5").is_err());
        assert!(parse_highlight("1:2:notacolor").is_err());
    }

    #[test]
    fn frame_collects_repeated_highlights() {
        let cli = Cli::try_parse_from([
            "seekline", "frame", "a.ogg", "--duration", "200", "--highlight", "1:2",
            "--highlight", "3:4:#00f",
        ])
        .unwrap();
        match cli.command {
            Commands::Frame { highlights, .. } => assert_eq!(highlights.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
