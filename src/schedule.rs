//! Cancelable delayed actions driven by an injected clock.
//!
//! The player runs on a single cooperative loop. Everything that happens
//! "later" (hiding the overlay, ending the seek settle window, the periodic
//! time-update tick) is queued here as a plain action value and handed back
//! to the owner by [`Scheduler::pop_due`] once its deadline has passed.
//!
//! Time never comes from the scheduler itself: callers pass `now` in, read
//! from a [`Clock`]. Tests use [`ManualClock`], the terminal app uses
//! [`MonotonicClock`].

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time, as an offset from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time, so a test can hand one copy to an engine
/// and keep another to advance.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, at: Duration) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Identifier of a scheduled task, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Owned handle to a scheduled task.
///
/// Deliberately not `Clone`: whoever holds the handle is the only party
/// that can cancel the task.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a TaskHandle leaves the task scheduled with no way to cancel it"]
pub struct TaskHandle {
    id: TaskId,
    deadline: Duration,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Scheduler time at which the task becomes due.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// A task that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<A> {
    pub id: TaskId,
    pub action: A,
}

/// Deadline-ordered queue of pending actions.
#[derive(Debug)]
pub struct Scheduler<A> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TaskId), A>,
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Scheduler time: the latest `now` observed, or the deadline of the
    /// task currently being dispatched.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `action` to fire `delay` after the current scheduler time.
    pub fn schedule(&mut self, delay: Duration, action: A) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id), action);
        TaskHandle { id, deadline }
    }

    /// Cancel a task. Returns false if it already fired.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.queue.remove(&(handle.deadline, handle.id)).is_some()
    }

    pub fn is_scheduled(&self, handle: &TaskHandle) -> bool {
        self.queue.contains_key(&(handle.deadline, handle.id))
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// While a task is handed out, scheduler time sits at that task's
    /// deadline, so anything it reschedules is measured from when it was
    /// due rather than from when the loop got around to it. Once nothing is
    /// due, scheduler time catches up to `now`. Time never runs backwards.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<A>> {
        let due = matches!(self.queue.keys().next(), Some((deadline, _)) if *deadline <= now);
        if !due {
            self.now = self.now.max(now);
            return None;
        }

        let ((deadline, id), action) = self.queue.pop_first()?;
        self.now = self.now.max(deadline);
        Some(Fired { id, action })
    }

    /// Drop every pending task. Returns how many were discarded.
    pub fn clear(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        count
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}
