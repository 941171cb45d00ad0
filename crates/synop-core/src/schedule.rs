//! Periodic refresh modeled as an explicit scheduled task
//!
//! The frame loop ticks the schedule with the current instant; tests drive
//! it with fabricated instants instead of waiting on wall clock. Cancelling
//! releases the schedule for good, which is how the session teardown stops
//! the periodic refresh.

use std::time::{Duration, Instant};

pub struct RefreshSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now + interval),
        }
    }

    /// Returns true when a refresh is due at `now`, and arms the next one.
    /// A cancelled schedule never fires again.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Release the schedule. There is no way to re-arm; the session creates
    /// a fresh schedule if it ever needs one.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
