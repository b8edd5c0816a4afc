//! Subcommand handlers for the tapseek binary

pub mod completions;
pub mod config;
pub mod play;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tapseek::Config;

/// Load the config from `--config` if given, otherwise the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Config file location in effect.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}
