//! Session countdown.
//!
//! Active time is kept as an accumulated duration plus the instant the current
//! running stretch began. Pausing folds the stretch into the accumulator, so
//! no clock origin is ever reconstructed. Every method takes `now` explicitly,
//! which keeps the countdown deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: Duration,
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Countdown {
    /// A countdown that starts running at `now`.
    pub fn started(limit: Duration, now: Instant) -> Self {
        Self {
            limit,
            accumulated: Duration::ZERO,
            running_since: Some(now),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Active time so far.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// Whole seconds left, counting elapsed time in whole seconds.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.limit
            .as_secs()
            .saturating_sub(self.elapsed(now).as_secs())
    }

    pub fn expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.limit
    }

    /// Stop accruing time. No-op when already stopped.
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    /// Start accruing time again. No-op when already running.
    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    /// Reset to a full, running countdown.
    pub fn restart(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        self.running_since = Some(now);
    }
}
