use std::time::Duration;

use crate::app::Instant;

/// Trailing-edge debouncer driven by explicit timestamps.
///
/// Every [`call`](Self::call) replaces the pending value and restarts the
/// quiet period; [`poll`](Self::poll) releases the value once `wait` has
/// elapsed since the most recent call. With a zero wait the value is
/// released on the first poll.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self { wait, pending: None }
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.wait, value));
    }

    /// Takes the pending value if its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Takes the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
