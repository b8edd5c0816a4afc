//! Media engine errors.

use std::path::PathBuf;

/// Errors that can occur while opening a media source.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Media source not found: {path}")]
    SourceUnavailable { path: PathBuf },

    #[error("Media source is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Invalid media duration: {0} (must be a positive number of seconds)")]
    InvalidDuration(f64),

    #[error("Failed to read media source: {0}")]
    Io(#[from] std::io::Error),
}
