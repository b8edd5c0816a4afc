//! Tracing subscriber setup.
//!
//! The player owns the terminal while it runs, so log lines go to a file
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install a global subscriber writing to the configured log file.
///
/// Returns the log file path, or `None` when no location could be
/// determined (logging is then left off).
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_file() else {
        return Ok(None);
    };
    init_to_file(&path, &config.log.level)?;
    Ok(Some(path))
}

/// Install a global subscriber appending to `path`.
pub fn init_to_file(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
