//! Player surface state.
//!
//! `PlayerSurface` is the one component with a lifecycle: it is mounted
//! with an engine (or without one, when the media could not be opened),
//! receives every event source the player has, and is torn down
//! explicitly. Rendering and input handling read from it and call into it;
//! they hold no state of their own beyond the pointer gesture.
//!
//! Event sources, all serialized on the caller's loop:
//! - engine time-update ticks (a recurring scheduled task)
//! - seek bar drag gestures
//! - surface taps and button presses
//! - the delayed overlay hide
//! - the delayed seek settle

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::PlayerConfig;
use crate::engine::{usable_duration, EngineError, MediaEngine};
use crate::player::overlay::OverlayTimer;
use crate::player::render::format_duration;
use crate::player::seek::{PlaybackProgress, SeekState};
use crate::schedule::{Fired, Scheduler, TaskHandle};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Close the player
    Quit,
}

/// Mirrors the engine run state. Only explicit play/pause actions change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub is_playing: bool,
}

/// Deferred work owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTask {
    /// Periodic engine time update
    TimeUpdate,
    /// Overlay dwell elapsed
    HideOverlay,
    /// Seek settle window elapsed
    SettleSeek,
}

/// Fixed delays used by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTiming {
    /// How long the overlay stays up after an interaction while playing
    pub dwell: Duration,
    /// Grace period after a committed seek before time updates apply again
    pub settle: Duration,
    /// Engine time-update cadence
    pub time_update_interval: Duration,
}

impl SurfaceTiming {
    /// Floor for the time-update cadence; a zero interval would make the
    /// recurring tick fire forever within a single pump.
    pub const MIN_TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(10);
}

impl Default for SurfaceTiming {
    fn default() -> Self {
        Self {
            dwell: Duration::from_secs(3),
            settle: Duration::from_millis(200),
            time_update_interval: Duration::from_secs(1),
        }
    }
}

impl From<&PlayerConfig> for SurfaceTiming {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            dwell: config.dwell(),
            settle: config.settle(),
            time_update_interval: config.time_update_interval(),
        }
    }
}

/// The player surface: engine, seek bar, overlay, and their timers.
#[derive(Debug)]
pub struct PlayerSurface<E: MediaEngine> {
    engine: Option<E>,
    seek: SeekState,
    overlay: OverlayTimer,
    status: PlaybackStatus,
    timing: SurfaceTiming,
    scheduler: Scheduler<SurfaceTask>,
    time_updates: Option<TaskHandle>,
    settle: Option<TaskHandle>,
    show_help: bool,
    needs_render: bool,
}

impl<E: MediaEngine> PlayerSurface<E> {
    /// Mount with a ready engine and subscribe to its time updates.
    pub fn new(engine: E, timing: SurfaceTiming) -> Self {
        Self::mount(Some(engine), timing)
    }

    /// Mount without media. Every control is a no-op.
    pub fn disabled(timing: SurfaceTiming) -> Self {
        Self::mount(None, timing)
    }

    /// Mount from the outcome of opening an engine.
    ///
    /// A failure is logged and yields a disabled surface rather than an error.
    pub fn open(engine: Result<E, EngineError>, timing: SurfaceTiming) -> Self {
        match engine {
            Ok(engine) => Self::new(engine, timing),
            Err(e) => {
                warn!(error = %e, "media unavailable, surface disabled");
                Self::disabled(timing)
            }
        }
    }

    fn mount(engine: Option<E>, timing: SurfaceTiming) -> Self {
        let timing = SurfaceTiming {
            time_update_interval: timing
                .time_update_interval
                .max(SurfaceTiming::MIN_TIME_UPDATE_INTERVAL),
            ..timing
        };
        let mut surface = Self {
            engine,
            seek: SeekState::new(),
            overlay: OverlayTimer::new(timing.dwell),
            status: PlaybackStatus::default(),
            timing,
            scheduler: Scheduler::new(),
            time_updates: None,
            settle: None,
            show_help: false,
            needs_render: true,
        };
        if surface.engine.is_some() {
            surface.time_updates = Some(
                surface
                    .scheduler
                    .schedule(timing.time_update_interval, SurfaceTask::TimeUpdate),
            );
        }
        surface
    }

    // === Queries ===

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    pub fn seek_state(&self) -> &SeekState {
        &self.seek
    }

    pub fn overlay(&self) -> &OverlayTimer {
        &self.overlay
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn timing(&self) -> SurfaceTiming {
        self.timing
    }

    pub fn scheduler(&self) -> &Scheduler<SurfaceTask> {
        &self.scheduler
    }

    pub fn progress(&self) -> PlaybackProgress {
        self.seek.progress()
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing
    }

    pub fn is_dragging(&self) -> bool {
        self.seek.is_dragging()
    }

    /// Play/pause/skip cluster. Always hidden mid-drag so the thumb stays clear.
    pub fn controls_visible(&self) -> bool {
        self.overlay.visible() && !self.seek.is_dragging()
    }

    /// Dimming layer behind the controls.
    pub fn scrim_visible(&self) -> bool {
        self.overlay.visible() || self.seek.is_dragging()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Engine position in seconds, 0 without media.
    pub fn current_time(&self) -> f64 {
        self.engine.as_ref().map_or(0.0, |e| e.current_time())
    }

    pub fn duration(&self) -> Option<f64> {
        self.engine.as_ref().and_then(|e| e.duration())
    }

    /// `MM:SS` of the engine position.
    pub fn time_label(&self) -> String {
        format_duration(self.current_time())
    }

    /// When the next scheduled task is due, for sizing the event poll.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Returns and clears the redraw flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    // === Scheduled work ===

    /// Fire every task due at `now`. Returns how many ran.
    pub fn pump(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            self.dispatch(task);
            fired += 1;
        }
        fired
    }

    fn dispatch(&mut self, fired: Fired<SurfaceTask>) {
        match fired.action {
            SurfaceTask::TimeUpdate => {
                if self.time_updates.as_ref().map(TaskHandle::id) == Some(fired.id) {
                    self.on_time_update();
                    self.time_updates = Some(
                        self.scheduler
                            .schedule(self.timing.time_update_interval, SurfaceTask::TimeUpdate),
                    );
                }
            }
            SurfaceTask::HideOverlay => {
                if self.overlay.on_hide_fired(fired.id) {
                    self.needs_render = true;
                }
            }
            SurfaceTask::SettleSeek => {
                if self.settle.as_ref().map(TaskHandle::id) == Some(fired.id) {
                    self.settle = None;
                    self.seek.settle();
                    debug!("seek settled, time updates resume");
                }
            }
        }
    }

    /// Apply one engine time update. No-op while a drag or seek is in flight.
    pub fn on_time_update(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };
        if self
            .seek
            .apply_time_update(engine.current_time(), engine.duration())
        {
            self.needs_render = true;
        }
    }

    // === Taps and buttons ===
    //
    // Delays scheduled by these actions are measured from scheduler time,
    // which only advances in `pump`. Call `pump(clock.now())` before
    // dispatching an input so the deadlines start from the real present.

    /// Tap on the video surface: toggle the overlay.
    ///
    /// Showing it while playing arms the hide; hiding it (or showing it while
    /// paused) leaves nothing scheduled.
    pub fn tap(&mut self) {
        if self.engine.is_none() {
            return;
        }
        let visible = self.overlay.toggle();
        if visible && self.status.is_playing {
            self.overlay
                .arm(&mut self.scheduler, SurfaceTask::HideOverlay);
        } else {
            self.overlay.cancel(&mut self.scheduler);
        }
        self.needs_render = true;
    }

    /// Play/pause button.
    pub fn toggle_play(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if self.status.is_playing {
            engine.pause();
            self.overlay.cancel(&mut self.scheduler);
            info!("paused");
        } else {
            engine.play();
            // A held thumb keeps the overlay up; release re-arms the hide
            if !self.seek.is_dragging() {
                self.overlay
                    .arm(&mut self.scheduler, SurfaceTask::HideOverlay);
            }
            info!("playing");
        }
        self.status.is_playing = !self.status.is_playing;
        self.needs_render = true;
    }

    /// Skip-back button. Not wired to anything yet.
    pub fn skip_backward(&mut self) {
        debug!("skip backward pressed (no action bound)");
    }

    /// Skip-forward button. Not wired to anything yet.
    pub fn skip_forward(&mut self) {
        debug!("skip forward pressed (no action bound)");
    }

    /// Fullscreen affordance. Not wired to anything yet.
    pub fn toggle_fullscreen(&mut self) {
        debug!("fullscreen pressed (no action bound)");
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
        self.needs_render = true;
    }

    // === Seek bar drag ===

    /// Thumb grabbed: keep the overlay up for the length of the drag.
    ///
    /// Ignored until the engine reports a usable duration, since there is
    /// nothing to seek within yet.
    pub fn begin_drag(&mut self) {
        if usable_duration(self.duration()).is_none() {
            debug!("drag ignored: duration not loaded yet");
            return;
        }
        self.overlay.cancel(&mut self.scheduler);
        self.seek.begin_drag();
        self.needs_render = true;
    }

    /// Thumb moved `dx` units from where the drag began, on a track
    /// `track_width` units wide.
    pub fn drag_to(&mut self, dx: f64, track_width: f64) {
        if self.seek.drag_to(dx, track_width) {
            self.needs_render = true;
        }
    }

    /// Thumb released: commit the seek and hold off time updates until the
    /// engine has had time to land it.
    ///
    /// The settle window starts at scheduler time, so pump first.
    pub fn end_drag(&mut self) {
        let Some(progress) = self.seek.end_drag() else {
            return;
        };
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        engine.seek(progress.value());
        info!(progress = progress.value(), "seek committed");

        if self.status.is_playing {
            self.overlay
                .arm(&mut self.scheduler, SurfaceTask::HideOverlay);
        }

        if let Some(previous) = self.settle.take() {
            self.scheduler.cancel(previous);
        }
        self.settle = Some(
            self.scheduler
                .schedule(self.timing.settle, SurfaceTask::SettleSeek),
        );
        self.needs_render = true;
    }

    // === Lifecycle ===

    /// Cancel every outstanding task. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.time_updates.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.settle.take() {
            self.scheduler.cancel(handle);
        }
        self.overlay.cancel(&mut self.scheduler);
        let leaked = self.scheduler.clear();
        if leaked > 0 {
            warn!(leaked, "unowned tasks discarded at teardown");
        }
    }
}

impl<E: MediaEngine> Drop for PlayerSurface<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}
