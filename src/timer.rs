//! Countdown timer state machine.
//!
//! Holds no OS timer: the host drives [`CountdownTimer::tick`] with an
//! injected instant, so there is nothing to cancel on teardown and tests
//! never sleep.

use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Default countdown length.
pub const DEFAULT_TOTAL: Duration = Duration::from_secs(30);

/// A pausable countdown.
///
/// While running, the remaining time is derived from a fixed end instant,
/// so ticks of any cadence converge on the same answer. Reaching zero
/// auto-resets to a stopped, full countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    total: Duration,
    time_left: Duration,
    running: bool,
    end_time: Option<Instant>,
}

impl CountdownTimer {
    /// Creates a stopped timer with `total` remaining.
    #[instrument]
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            time_left: total,
            running: false,
            end_time: None,
        }
    }

    /// Returns the countdown length.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Returns the remaining time as of the last tick or pause.
    pub fn time_left(&self) -> Duration {
        self.time_left
    }

    /// Returns whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts or pauses the countdown.
    ///
    /// Starting pins the end instant at `now + time_left`; pausing
    /// recomputes the remaining time from the end instant.
    #[instrument(skip(now))]
    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.time_left = self.remaining_at(now);
            self.running = false;
            self.end_time = None;
            debug!(time_left = ?self.time_left, "Timer paused");
        } else {
            self.end_time = Some(now + self.time_left);
            self.running = true;
            debug!(time_left = ?self.time_left, "Timer started");
        }
    }

    /// Stops the countdown and restores the full duration.
    #[instrument]
    pub fn reset(&mut self) {
        self.time_left = self.total;
        self.running = false;
        self.end_time = None;
    }

    /// Advances the countdown to `now`. No-op while paused; reaching zero
    /// auto-resets.
    #[instrument(skip(now))]
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        self.time_left = self.remaining_at(now);
        if self.time_left.is_zero() {
            debug!("Countdown finished, resetting");
            self.reset();
        }
    }

    /// Fraction of the countdown already elapsed, 0.0 to 1.0.
    pub fn elapsed_fraction(&self) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        1.0 - self.time_left.as_secs_f64() / self.total.as_secs_f64()
    }

    /// Remaining time formatted as `mm:ss`.
    pub fn label(&self) -> String {
        let secs = self.time_left.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    fn remaining_at(&self, now: Instant) -> Duration {
        match self.end_time {
            Some(end) => end.saturating_duration_since(now),
            None => self.time_left,
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL)
    }
}
