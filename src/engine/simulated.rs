//! Clock-driven stand-in for a platform media engine.
//!
//! Position advances with the injected clock while playing. Seeks land
//! after a configurable latency and the duration only becomes known after
//! a metadata delay, which reproduces the two timing hazards the player
//! surface has to cope with.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use super::{EngineError, MediaEngine};
use crate::schedule::Clock;

/// A media file the engine has been pointed at.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    path: PathBuf,
    duration: f64,
}

impl MediaSource {
    /// Locate a media file.
    ///
    /// Nothing is decoded, so the caller supplies the duration.
    pub fn open(path: impl AsRef<Path>, duration_secs: f64) -> Result<Self, EngineError> {
        let path = path.as_ref();

        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(EngineError::InvalidDuration(duration_secs));
        }

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EngineError::SourceUnavailable {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(EngineError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            duration: duration_secs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name (file stem) for status lines.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Latency knobs for [`SimulatedEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineTiming {
    /// Time between a seek request and the position actually jumping.
    pub seek_latency: Duration,
    /// Time after construction before `duration()` reports a value.
    pub metadata_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingSeek {
    lands_at: Duration,
    target: f64,
}

/// Engine whose position is derived from a [`Clock`].
#[derive(Debug)]
pub struct SimulatedEngine<C: Clock> {
    clock: C,
    duration: f64,
    timing: EngineTiming,
    metadata_ready_at: Duration,
    playing: bool,
    anchor_position: f64,
    anchor_at: Duration,
    pending_seek: Option<PendingSeek>,
}

impl<C: Clock> SimulatedEngine<C> {
    pub fn new(source: &MediaSource, clock: C, timing: EngineTiming) -> Self {
        Self::with_duration(source.duration(), clock, timing)
    }

    /// Build an engine for media of the given length without a file.
    pub fn with_duration(duration: f64, clock: C, timing: EngineTiming) -> Self {
        let now = clock.now();
        Self {
            clock,
            duration: duration.max(0.0),
            timing,
            metadata_ready_at: now.saturating_add(timing.metadata_delay),
            playing: false,
            anchor_position: 0.0,
            anchor_at: now,
            pending_seek: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a seek has been requested but has not landed yet.
    pub fn is_seeking(&self) -> bool {
        self.pending_seek
            .is_some_and(|seek| self.clock.now() < seek.lands_at)
    }

    fn position_at(&self, now: Duration) -> f64 {
        let (position, since) = match self.pending_seek {
            Some(seek) if now >= seek.lands_at => (seek.target, seek.lands_at),
            _ => (self.anchor_position, self.anchor_at),
        };
        let elapsed = if self.playing {
            now.saturating_sub(since).as_secs_f64()
        } else {
            0.0
        };
        (position + elapsed).min(self.duration)
    }

    /// Fold elapsed time and any landed seek into the anchor.
    fn rebase(&mut self) {
        let now = self.clock.now();
        let position = self.position_at(now);
        if self.pending_seek.is_some_and(|seek| now >= seek.lands_at) {
            self.pending_seek = None;
        }
        self.anchor_position = position;
        self.anchor_at = now;
    }
}

impl<C: Clock> MediaEngine for SimulatedEngine<C> {
    fn play(&mut self) {
        if self.playing {
            return;
        }
        self.rebase();
        self.playing = true;
    }

    fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.rebase();
        self.playing = false;
    }

    fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.duration() else {
            debug!("seek ignored: duration not loaded yet");
            return;
        };
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        self.rebase();
        let target = fraction * duration;
        self.pending_seek = Some(PendingSeek {
            lands_at: self.clock.now().saturating_add(self.timing.seek_latency),
            target,
        });
        debug!(target, "engine seek requested");
    }

    fn current_time(&self) -> f64 {
        self.position_at(self.clock.now())
    }

    fn duration(&self) -> Option<f64> {
        (self.clock.now() >= self.metadata_ready_at).then_some(self.duration)
    }
}
