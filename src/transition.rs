//! Linear fade to black that precedes the show.
//!
//! The fade is split into `steps` ticks spaced `duration / steps` apart.
//! After `k` ticks every channel has lost `255 * k / steps`, so the full
//! range is spread over the whole window and the last tick lands on zero.
//! Due ticks are derived from the elapsed time rather than counted per
//! frame, so a frame rate slower than the tick interval still lands on
//! black exactly when the window closes.

use embassy_time::{Duration, Instant};

use crate::config::FadeConfig;
use crate::grid::PixelGrid;
use crate::timer::elapsed_since;

/// Outcome of advancing the fade by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeProgress {
    /// Still inside the fade window; nothing else should draw this frame
    Fading,
    /// The window has closed and the buffer is black
    Complete,
}

#[derive(Debug, Clone)]
pub struct FadeTransition {
    duration: Duration,
    steps: u16,
    interval: Duration,
    started: Instant,
    applied: u16,
}

impl FadeTransition {
    pub fn new(config: &FadeConfig) -> Self {
        let steps = config.steps.max(1);
        Self {
            duration: config.duration,
            steps,
            interval: config.duration / u32::from(steps),
            started: Instant::from_ticks(0),
            applied: 0,
        }
    }

    /// Restart the fade window at `now`
    pub fn start(&mut self, now: Instant) {
        self.started = now;
        self.applied = 0;
    }

    /// Time between two decrements
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Total per-channel amount removed since the fade started
    pub const fn faded(&self) -> u8 {
        Self::level(self.applied, self.steps)
    }

    /// Cumulative decrement after `applied` of `steps` ticks
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    const fn level(applied: u16, steps: u16) -> u8 {
        (255 * applied as u32 / steps as u32) as u8
    }

    pub const fn started_at(&self) -> Instant {
        self.started
    }

    /// Number of steps that should have been applied by `now`
    #[allow(clippy::cast_possible_truncation)]
    fn due_steps(&self, elapsed: Duration) -> u16 {
        if elapsed >= self.duration {
            return self.steps;
        }
        let due = elapsed.as_ticks() * u64::from(self.steps) / self.duration.as_ticks();
        due.min(u64::from(self.steps)) as u16
    }

    /// Apply the decrements due at `now`
    pub fn advance<const N: usize, const W: usize, const H: usize>(
        &mut self,
        now: Instant,
        grid: &mut PixelGrid<N, W, H>,
    ) -> FadeProgress {
        let elapsed = elapsed_since(now, self.started);
        let due = self.due_steps(elapsed);
        if due > self.applied {
            let before = self.faded();
            self.applied = due;
            grid.fade_linear(self.faded() - before);
        }

        if elapsed >= self.duration {
            FadeProgress::Complete
        } else {
            FadeProgress::Fading
        }
    }
}
