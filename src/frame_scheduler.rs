//! Frame scheduling and timing utilities.
//!
//! `tick` is portable: it does one frame of work and tells the caller how
//! long to wait. `run` is the blocking firmware loop built on top of it.

use embassy_time::{Duration, Instant, block_for};
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::CommandSource;
use crate::renderer::{Renderer, Status};
use crate::timer::Timer;
use crate::OutputDriver;

/// Interval between status lines
pub const STATUS_INTERVAL: Duration = Duration::from_secs(1);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame, measured from the tick start
    /// (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

impl FrameResult {
    /// Time left until the deadline, as seen at `now`.
    ///
    /// Call after the frame work is done to subtract the time it took.
    pub fn remaining(&self, now: Instant) -> Duration {
        time_until(self.next_deadline, now)
    }
}

fn time_until(deadline: Instant, now: Instant) -> Duration {
    if deadline > now {
        deadline - now
    } else {
        Duration::from_millis(0)
    }
}

/// Top-level per-frame driver.
///
/// Each tick drains the command source, renders the active mode and hands
/// the frame to the output driver.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, uart_commands, strip);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     block_for(result.remaining(Instant::now()));
/// }
/// ```
pub struct FrameScheduler<
    O: OutputDriver,
    S: CommandSource,
    R: RngCore,
    const N: usize,
    const W: usize,
    const H: usize,
> {
    output: O,
    commands: S,
    renderer: Renderer<N, W, H, R>,
    next_frame: Instant,
    frame_duration: Duration,
    status_timer: Timer,
    last_status: Option<Status>,
}

impl<O: OutputDriver, S: CommandSource, R: RngCore, const N: usize, const W: usize, const H: usize>
    FrameScheduler<O, S, R, N, W, H>
{
    /// Create a new frame scheduler pacing at the renderer's frame rate.
    pub fn new(renderer: Renderer<N, W, H, R>, commands: S, driver: O) -> Self {
        let frame_duration = renderer.frame_duration();
        Self::with_frame_duration(renderer, commands, driver, frame_duration)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<N, W, H, R>,
        commands: S,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            commands,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
            status_timer: Timer::new(Instant::from_millis(0), STATUS_INTERVAL),
            last_status: None,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Drains every pending command byte in arrival order
    /// 2. Renders the current mode
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        while let Some(byte) = self.commands.try_read() {
            // Unknown bytes are logged by the renderer and leave it idle
            self.renderer.handle_command(byte, now).ok();
        }

        let frame = self.renderer.render(now);
        self.output.write(frame);

        if self.status_timer.poll(now) {
            let status = self.renderer.status(now);
            #[cfg(feature = "esp32-log")]
            println!("{}", status);
            self.last_status = Some(status);
        }

        self.next_frame += self.frame_duration;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: time_until(self.next_frame, now),
        }
    }

    /// Run forever, sleeping out the rest of every frame.
    ///
    /// Needs an `embassy-time` driver for `Instant::now`.
    pub fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            block_for(result.remaining(Instant::now()));
        }
    }

    /// Most recent periodic status snapshot
    pub const fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<N, W, H, R> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<N, W, H, R> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn commands_mut(&mut self) -> &mut S {
        &mut self.commands
    }
}
