//! seekline - audio timeline widget in the terminal

mod commands;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use seekline::cli::{Cli, Commands, ConfigCommands};
use tracing_subscriber::EnvFilter;

use commands::frame::FrameRequest;
use commands::play::PlayOverrides;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            source,
            config,
            duration,
            highlights,
            skip,
            show_hours,
            top,
            log_file,
        } => {
            // The player owns the terminal, so logs go to a file or nowhere
            if let Some(path) = log_file.as_deref() {
                init_file_logging(path)?;
            }
            let config = commands::resolve_config(config.as_deref(), &source)?;
            let config = PlayOverrides {
                highlights,
                skip,
                show_hours,
                top,
            }
            .apply(config);
            commands::play::handle(config, duration)
        }
        Commands::Frame {
            source,
            duration,
            time,
            width,
            height,
            highlights,
            config,
            ansi,
        } => {
            init_stderr_logging();
            let config = commands::resolve_config(config.as_deref(), &source)?;
            let config = PlayOverrides {
                highlights,
                ..Default::default()
            }
            .apply(config);
            let request = FrameRequest {
                duration,
                time,
                width,
                height,
            };
            commands::frame::handle(config, request, ansi)
        }
        Commands::Config(cmd) => {
            init_stderr_logging();
            match cmd {
                ConfigCommands::Show { config } => {
                    commands::config::handle_show(config.as_deref())
                }
            }
        }
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}

/// `RUST_LOG` if set, else `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
