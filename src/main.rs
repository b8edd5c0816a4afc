//! tapseek - tap-to-reveal video player surface for the terminal

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "tapseek")]
#[command(version)]
#[command(about = "Terminal video player surface with a draggable seek bar")]
#[command(
    long_about = "Terminal video player surface with a draggable seek bar.

Click the surface (or press t) to show the playback controls. While
playing they hide again after a few seconds. Drag the seek bar thumb
to jump within the media."
)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a media file in the player
    #[command(long_about = "Open a media file in the player.

Playback is simulated: the file must exist, and its length is taken
from --duration.

Controls:
  space       Play / pause
  t / Enter   Show / hide controls
  Left/Right  Skip back / forward
  f           Fullscreen
  ?           Help
  q / Esc     Quit

EXAMPLE:
  tapseek play clip.mp4 --duration 120")]
    Play {
        /// Media file to open
        file: PathBuf,
        /// Media length in seconds
        #[arg(long, short, default_value_t = 60.0, value_name = "SECS")]
        duration: f64,
    },

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completions.

EXAMPLE:
  tapseek completions bash > ~/.local/share/bash-completion/completions/tapseek")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Play { file, duration } => commands::play::handle(&file, duration, config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell, &mut <Cli as clap::CommandFactory>::command())
        }
    }
}
