// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::{Duration, Instant};

/// Default quiescence interval between the last input edit and the
/// validation/render pass it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancellable one-shot scheduler. Scheduling again before the deadline
/// supersedes the pending pass: last writer wins, nothing queues.
///
/// The clock is passed in explicitly so scheduling stays testable
/// without sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume a due deadline. At most one pass fires per quiescence
    /// window.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Remaining wait, used to bound the event-loop poll timeout.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
