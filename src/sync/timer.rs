//! Cancellable timing primitives for the coordinator.
//!
//! Nothing here spawns a thread or arms an OS timer. Deadlines are plain
//! [`Instant`]s and the host event loop drives them by polling with the
//! current time, which keeps the whole state machine single-threaded and
//! deterministic under test.

use std::time::{Duration, Instant};

/// Fixed-delay, one-shot timer driving the update-lock release.
///
/// `schedule` replaces any pending deadline rather than stacking a second
/// one, so the lock cannot flap between set and clear.
#[derive(Debug, Clone)]
pub struct ResetTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once, when a pending deadline has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Trailing-edge debouncer: rapid pushes collapse to the latest value, which
/// is yielded once after a quiet period. A superseded value is discarded
/// entirely.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    /// The latest value, once the quiet period has elapsed since the last
    /// push.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
