//! Play command handler

use std::path::Path;

use anyhow::{bail, Result};

use tapseek::logging;
use tapseek::player::{play_session, SessionEnd};
use tapseek::theme::current_theme;

use super::load_config;

/// Open `file` in the player and block until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, duration: f64, config_path: Option<&Path>) -> Result<()> {
    if !duration.is_finite() || duration <= 0.0 {
        bail!("Duration must be a positive number of seconds, got {}", duration);
    }

    let config = load_config(config_path)?;
    let theme = current_theme();

    // A broken log location should not keep the player from starting
    if let Err(e) = logging::init(&config) {
        eprintln!("{}", theme.error_text(&format!("Logging disabled: {:#}", e)));
    }

    match play_session(file, duration, &config)? {
        SessionEnd::Closed(name) => {
            println!("{}", theme.primary_text(&format!("Closed {}", name)));
        }
        SessionEnd::Unavailable(name) => {
            eprintln!(
                "{}",
                theme.error_text(&format!("Media unavailable: {}", name))
            );
        }
    }
    Ok(())
}
