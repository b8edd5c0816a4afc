//! tapseek - a tap-to-reveal video player surface for the terminal
//!
//! This library provides the player's state machine (seek bar, overlay
//! controls, their timers), the engine seam it drives, and a ratatui front
//! end.

pub mod config;
pub mod engine;
pub mod logging;
pub mod player;
pub mod schedule;
pub mod theme;

pub use config::Config;
