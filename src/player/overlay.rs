//! Control overlay visibility with a dwell-and-hide timer.

use std::time::Duration;

use tracing::debug;

use crate::schedule::{Scheduler, TaskHandle, TaskId};

/// Whether a hide is currently scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Idle,
    Armed,
}

/// Overlay visibility plus the single owned handle to a pending hide.
#[derive(Debug)]
pub struct OverlayTimer {
    visible: bool,
    dwell: Duration,
    pending_hide: Option<TaskHandle>,
}

impl OverlayTimer {
    pub fn new(dwell: Duration) -> Self {
        Self {
            visible: false,
            dwell,
            pending_hide: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    pub fn phase(&self) -> OverlayPhase {
        if self.pending_hide.is_some() {
            OverlayPhase::Armed
        } else {
            OverlayPhase::Idle
        }
    }

    /// Deadline of the pending hide, if armed.
    pub fn hide_deadline(&self) -> Option<Duration> {
        self.pending_hide.as_ref().map(TaskHandle::deadline)
    }

    /// Flip visibility. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Schedule `hide` after the dwell time, replacing any pending hide.
    pub fn arm<A>(&mut self, scheduler: &mut Scheduler<A>, hide: A) {
        self.cancel(scheduler);
        let handle = scheduler.schedule(self.dwell, hide);
        debug!(deadline = ?handle.deadline(), "overlay hide armed");
        self.pending_hide = Some(handle);
    }

    /// Drop the pending hide, if any. Returns whether one was canceled.
    pub fn cancel<A>(&mut self, scheduler: &mut Scheduler<A>) -> bool {
        match self.pending_hide.take() {
            Some(handle) => {
                debug!("overlay hide canceled");
                scheduler.cancel(handle)
            }
            None => false,
        }
    }

    /// Handle a fired hide task.
    ///
    /// Only the task behind the currently owned handle may hide the overlay;
    /// anything else is stale and ignored.
    pub fn on_hide_fired(&mut self, id: TaskId) -> bool {
        match &self.pending_hide {
            Some(handle) if handle.id() == id => {
                self.pending_hide = None;
                self.visible = false;
                debug!("overlay hidden after dwell");
                true
            }
            _ => false,
        }
    }
}
