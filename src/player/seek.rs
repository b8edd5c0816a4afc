//! Seek bar progress reconciliation.
//!
//! Two writers compete for the displayed progress: organic time updates
//! from the engine, and the user dragging the thumb. [`SeekState`] decides
//! which one is authoritative at any instant via [`SeekState::authority`];
//! every write path consults it, so the rule lives in exactly one place.

/// Playback position as a fraction of total duration, always in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PlaybackProgress(f64);

impl PlaybackProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp any value into range. NaN maps to the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::START
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Progress of `current` seconds into `duration` seconds.
    ///
    /// Returns `None` when the ratio is undefined (duration zero, negative
    /// or non-finite, or a non-finite position).
    pub fn from_times(current: f64, duration: f64) -> Option<Self> {
        if !(duration.is_finite() && duration > 0.0) || !current.is_finite() {
            return None;
        }
        Some(Self::new(current / duration))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Shift by `delta` (a fraction of the track), clamped.
    pub fn offset_by(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

/// Which writer currently owns `progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Writer {
    /// Engine time updates are applied.
    TimeUpdates,
    /// The user is dragging the thumb.
    Drag,
    /// A seek was committed and the engine has not had time to land it.
    SeekSettle,
}

/// Progress and drag bookkeeping for the seek bar. Pure state, no I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeekState {
    progress: PlaybackProgress,
    last_committed: PlaybackProgress,
    dragging: bool,
    seek_pending: bool,
}

impl SeekState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known position instead of zero.
    pub fn with_progress(progress: PlaybackProgress) -> Self {
        Self {
            progress,
            last_committed: progress,
            ..Self::default()
        }
    }

    pub fn progress(&self) -> PlaybackProgress {
        self.progress
    }

    /// Progress as of the last engine update or drag release.
    pub fn last_committed_progress(&self) -> PlaybackProgress {
        self.last_committed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_seek_pending(&self) -> bool {
        self.seek_pending
    }

    pub fn authority(&self) -> Writer {
        if self.dragging {
            Writer::Drag
        } else if self.seek_pending {
            Writer::SeekSettle
        } else {
            Writer::TimeUpdates
        }
    }

    /// Apply an engine time update.
    ///
    /// Ignored while a drag or seek is in flight, and while the duration is
    /// unusable. Returns whether progress was written.
    pub fn apply_time_update(&mut self, current_time: f64, duration: Option<f64>) -> bool {
        if self.authority() != Writer::TimeUpdates {
            return false;
        }
        let Some(progress) = duration.and_then(|d| PlaybackProgress::from_times(current_time, d))
        else {
            return false;
        };

        self.progress = progress;
        self.last_committed = progress;
        true
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Follow the thumb.
    ///
    /// `dx` is the cumulative horizontal displacement since the drag began,
    /// so repeated move events never accumulate rounding drift.
    pub fn drag_to(&mut self, dx: f64, track_width: f64) -> bool {
        if !self.dragging || !dx.is_finite() || !(track_width.is_finite() && track_width > 0.0) {
            return false;
        }
        self.progress = self.last_committed.offset_by(dx / track_width);
        true
    }

    /// Release the thumb and commit the dragged position.
    ///
    /// Opens the settle window; the caller closes it with [`settle`](Self::settle)
    /// once the engine has had time to land the seek.
    pub fn end_drag(&mut self) -> Option<PlaybackProgress> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.last_committed = self.progress;
        self.seek_pending = true;
        Some(self.progress)
    }

    /// Close the settle window; time updates apply again.
    pub fn settle(&mut self) {
        self.seek_pending = false;
    }
}
