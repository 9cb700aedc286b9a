//! Cancellable one-shot timer.

use std::time::{Duration, Instant};

/// One-shot delay owned by the controller
///
/// Models the simulated connect delay (and the splash hold) as an explicit
/// handle: armed with [`arm`](OneShotTimer::arm), observed via
/// [`is_elapsed`](OneShotTimer::is_elapsed) from the shell's tick, and
/// disarmed at any point with [`cancel`](OneShotTimer::cancel). Nothing
/// blocks; expiry is only ever noticed on a tick.
#[derive(Debug)]
pub struct OneShotTimer {
    /// Armed at, `None` while disarmed
    started: Option<Instant>,
    /// Delay before the timer reads elapsed
    duration: Duration,
}

impl OneShotTimer {
    /// Create a disarmed timer with a fixed delay
    pub fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Arm (or re-arm) the timer from now
    pub fn arm(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.started = None;
    }

    /// Is the timer armed and not yet expired or taken?
    pub fn is_armed(&self) -> bool {
        self.started.is_some()
    }

    /// Has an armed timer's delay elapsed?
    pub fn is_elapsed(&self) -> bool {
        self.started
            .map(|s| s.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Consume an expiry: returns true exactly once per arm, then disarms
    pub fn take_elapsed(&mut self) -> bool {
        if self.is_elapsed() {
            self.started = None;
            true
        } else {
            false
        }
    }

    /// Remaining delay, zero when disarmed or expired
    pub fn remaining(&self) -> Duration {
        self.started
            .map(|s| self.duration.saturating_sub(s.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}
