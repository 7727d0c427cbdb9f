//! Subcommand handlers for the seekline binary

pub mod completions;
pub mod config;
pub mod frame;
pub mod play;

use std::path::Path;

use anyhow::{Context, Result};
use seekline::WidgetConfig;

/// Load `path` if given, else start from defaults for `source`.
///
/// The source from the command line always wins over the file's.
pub fn resolve_config(path: Option<&Path>, source: &str) -> Result<WidgetConfig> {
    let mut config = match path {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WidgetConfig::new(source),
    };
    config.source = source.to_string();
    Ok(config)
}
