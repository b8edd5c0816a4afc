//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use tapseek::theme::current_theme;
use tapseek::Config;

use super::{load_config, resolve_config_path};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_config_path(config_path)?.display());
    Ok(())
}

/// Write the default configuration.
///
/// Refuses to replace an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_config_path(config_path)?;
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
