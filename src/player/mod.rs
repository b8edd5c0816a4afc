//! Video player surface
//!
//! A fixed-aspect viewport with a seek bar along its bottom edge and a
//! tap-toggled overlay of playback controls that hides itself a few
//! seconds after the last interaction while playing.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `seek`: progress value and the drag / time-update reconciliation
//! - `overlay`: overlay visibility and its auto-hide timer
//! - `state`: `PlayerSurface`, which owns the engine and all timers
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: Layout and drawing (viewport, controls, seek track, status bar, help)
//! - `native`: Terminal front end driving the surface
//!
//! # Usage
//!
//! ```no_run
//! use tapseek::player::{play_session, SessionEnd};
//! use tapseek::Config;
//! use std::path::Path;
//!
//! let config = Config::default();
//! match play_session(Path::new("clip.mp4"), 120.0, &config).unwrap() {
//!     SessionEnd::Closed(name) => println!("Closed {}", name),
//!     SessionEnd::Unavailable(name) => eprintln!("Could not open {}", name),
//! }
//! ```

pub mod input;
mod native;
pub mod overlay;
pub mod render;
pub mod seek;
pub mod state;

pub use native::{draw_frame, play_session, poll_timeout, SessionEnd, FRAME_INTERVAL};
pub use overlay::{OverlayPhase, OverlayTimer};
pub use seek::{PlaybackProgress, SeekState, Writer};
pub use state::{InputResult, PlaybackStatus, PlayerSurface, SurfaceTask, SurfaceTiming};
