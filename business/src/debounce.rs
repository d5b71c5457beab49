//! Trailing-edge debounce driven by an explicit clock.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: DateTime<Utc>,
}

/// Holds at most one pending value and releases it once input has been
/// quiet for the configured period.
///
/// Every [`Debouncer::push`] supersedes the pending value and restarts the
/// quiet period, so a burst of pushes releases only the last value, once.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: DateTime<Utc>) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet,
        });
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left until the pending value is released, zero if overdue.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.signed_duration_since(now).max(Duration::zero()))
    }
}
