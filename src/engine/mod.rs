//! Media engine seam.
//!
//! The player never decodes or renders video itself. It drives an engine
//! through the small [`MediaEngine`] contract: fire-and-forget play/pause,
//! a fractional seek, and synchronous queries for the latest known position
//! and duration.
//!
//! - `simulated`: clock-driven engine used by the terminal app and tests

mod error;
mod simulated;

pub use error::EngineError;
pub use simulated::{EngineTiming, MediaSource, SimulatedEngine};

/// Playback engine driven by the player surface.
pub trait MediaEngine {
    /// Start or resume playback. Idempotent.
    fn play(&mut self);

    /// Pause playback. Idempotent.
    fn pause(&mut self);

    /// Request a jump to `fraction * duration`.
    ///
    /// The request is asynchronous: `current_time` may keep reporting the
    /// old position for a while after this returns.
    fn seek(&mut self, fraction: f64);

    /// Latest known playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds, or `None` before metadata has loaded.
    fn duration(&self) -> Option<f64>;
}

/// Filter an engine duration down to one that is safe to divide by.
///
/// Engines may report zero, NaN or infinity while metadata is loading.
pub fn usable_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}
