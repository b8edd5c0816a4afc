//! Configuration file handling.
//!
//! Settings live in `<config dir>/tapseek/config.toml`. Every field has a
//! default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

/// Errors that can occur while loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub track: TrackConfig,
    pub engine: EngineConfig,
    pub log: LogConfig,
}

/// Overlay and seek timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How long the controls stay up after an interaction while playing (ms)
    pub dwell_ms: u64,
    /// Time updates are ignored for this long after a seek is committed (ms)
    pub settle_ms: u64,
    /// Engine time-update cadence (ms)
    pub time_update_ms: u64,
    /// Surface palette: `cinema` or `ocean`
    pub theme: ThemeName,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 3_000,
            settle_ms: 200,
            time_update_ms: 1_000,
            theme: ThemeName::Cinema,
        }
    }
}

impl PlayerConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn time_update_interval(&self) -> Duration {
        Duration::from_millis(self.time_update_ms)
    }
}

/// Seek track geometry, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Visible thumb width
    pub thumb_size: u16,
    /// Width of the invisible region that accepts a grab
    pub hit_size: u16,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            thumb_size: 1,
            hit_size: 3,
        }
    }
}

/// Simulated engine latencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay between a seek request and the position jumping (ms)
    pub seek_latency_ms: u64,
    /// Delay before the media duration is known (ms)
    pub metadata_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seek_latency_ms: 120,
            metadata_delay_ms: 0,
        }
    }
}

impl EngineConfig {
    pub fn seek_latency(&self) -> Duration {
        Duration::from_millis(self.seek_latency_ms)
    }

    pub fn metadata_delay(&self) -> Duration {
        Duration::from_millis(self.metadata_delay_ms)
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log file; defaults to `<data dir>/tapseek/tapseek.log`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("tapseek").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolved log file path.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(|| {
            dirs::data_dir().map(|dir| dir.join("tapseek").join("tapseek.log"))
        })
    }
}
