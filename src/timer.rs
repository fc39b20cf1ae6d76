//! Software countdown timers polled once per frame.

use embassy_time::{Duration, Instant};

/// Time elapsed between `earlier` and `now`.
///
/// Computed on raw ticks with wrapping subtraction, so a counter that
/// rolled over still yields the forward distance.
#[inline]
pub fn elapsed_since(now: Instant, earlier: Instant) -> Duration {
    Duration::from_ticks(now.as_ticks().wrapping_sub(earlier.as_ticks()))
}

/// Reusable periodic timer
///
/// `due(now)` is true iff `now - last_fired >= period`. Firing moves
/// `last_fired` to `now`; the timer never accumulates missed periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    last_fired: Instant,
    period: Duration,
}

impl Timer {
    /// Create a timer that first fires one `period` after `now`
    pub const fn new(now: Instant, period: Duration) -> Self {
        Self {
            last_fired: now,
            period,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn last_fired(&self) -> Instant {
        self.last_fired
    }

    pub fn due(&self, now: Instant) -> bool {
        elapsed_since(now, self.last_fired) >= self.period
    }

    /// Mark the timer as fired at `now`
    pub fn fire(&mut self, now: Instant) {
        self.last_fired = now;
    }

    /// Restart the countdown from `now` with a new period
    pub fn rearm(&mut self, now: Instant, period: Duration) {
        self.last_fired = now;
        self.period = period;
    }

    /// Fire if due. Returns whether it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.due(now) {
            self.fire(now);
            return true;
        }
        false
    }
}
