//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};
use seekline::WidgetConfig;

/// Show the effective configuration as TOML.
///
/// Without `--config`, reads the user config location and falls back to
/// the built-in defaults when nothing is there.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_default()?,
    };
    print!("{}", render(&config)?);
    Ok(())
}

fn load_default() -> Result<WidgetConfig> {
    let path = WidgetConfig::default_path()?;
    if path.exists() {
        return Ok(WidgetConfig::load(&path)?);
    }
    eprintln!("No config at {}, showing defaults", path.display());
    Ok(WidgetConfig::new(""))
}

/// Serialize a config the way `config show` prints it.
pub fn render(config: &WidgetConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
