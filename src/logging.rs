//! Tracing setup
//!
//! The player owns the terminal, so log lines go to a file instead of
//! stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the path being written to.
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let path = config
        .file_path()
        .context("Could not determine log file location")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(build_filter(config)),
        )
        .try_init()
        .context("Logging already initialized")?;

    info!(path = %path.display(), "logging initialized");
    Ok(path)
}
