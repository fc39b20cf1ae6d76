use core::fmt::{Display, Formatter};

use embassy_time::{Duration, Instant};
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};
use crate::command::Command;
use crate::config::EngineConfig;
use crate::error::{ConfigError, UnknownCommand};
use crate::filter::BrightnessFilter;
use crate::grid::PixelGrid;
use crate::pattern::{IdleSparkle, Pattern, PatternEngine, PatternId};
use crate::transition::{FadeProgress, FadeTransition};

const MODE_NAME_IDLE: &str = "idle";
const MODE_NAME_FADE: &str = "fade";
const MODE_NAME_ACTIVE: &str = "active";

/// Coarse animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ambient sparkle
    Idle,
    /// Fading to black after a show trigger
    FadeTransition,
    /// Show patterns running
    Active,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => MODE_NAME_IDLE,
            Self::FadeTransition => MODE_NAME_FADE,
            Self::Active => MODE_NAME_ACTIVE,
        }
    }
}

/// Snapshot of the engine for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub uptime: Instant,
    pub mode: Mode,
    pub pattern: PatternId,
    pub pattern_duration: Duration,
    pub fps: u32,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] mode: {} pattern: {} ({}) duration: {}ms fps: {}",
            self.uptime.as_millis(),
            self.mode.as_str(),
            self.pattern as u8,
            self.pattern.as_str(),
            self.pattern_duration.as_millis(),
            self.fps
        )
    }
}

/// Per-frame mode dispatcher
///
/// Owns the grid and every generator. Commands mutate the mode immediately;
/// `render` advances whatever the mode selects and returns the
/// brightness-scaled frame.
pub struct Renderer<const N: usize, const W: usize, const H: usize, R: RngCore> {
    // Configuration
    fps: u32,
    filter: BrightnessFilter,

    // Internal state
    mode: Mode,
    last_run: Instant,
    grid: PixelGrid<N, W, H>,
    output: [Rgb; N],
    rng: R,

    // Generators
    fade: FadeTransition,
    patterns: PatternEngine<N, W, H>,
    idle: IdleSparkle,
}

impl<const N: usize, const W: usize, const H: usize, R: RngCore> Renderer<N, W, H, R> {
    /// Create a renderer in idle mode
    pub fn new(config: &EngineConfig, rng: R, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "esp32-log")]
        println!("OK {}x{} ({} leds)", W, H, N);

        Ok(Self {
            fps: config.fps,
            filter: BrightnessFilter::new(config.brightness),
            mode: Mode::Idle,
            last_run: now,
            grid: PixelGrid::new(),
            output: [BLACK; N],
            rng,
            fade: FadeTransition::new(&config.fade),
            patterns: PatternEngine::new(&config.show, &config.life, now),
            idle: IdleSparkle::new(&config.idle, now),
        })
    }

    /// Apply one command byte
    ///
    /// Unknown bytes are reported and fall back to idle.
    pub fn handle_command(&mut self, byte: u8, now: Instant) -> Result<Command, UnknownCommand> {
        let command = Command::try_from(byte);
        match command {
            Ok(Command::Idle) => {
                self.mode = Mode::Idle;
                #[cfg(feature = "esp32-log")]
                println!("idle mode");
            }
            Ok(Command::Show) => {
                self.mode = Mode::FadeTransition;
                self.last_run = now;
                self.fade.start(now);
                self.patterns.reseed(&mut self.rng);
                #[cfg(feature = "esp32-log")]
                println!("show time");
            }
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("{}", _err);
                self.mode = Mode::Idle;
            }
        }
        command
    }

    /// Process one frame
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        match self.mode {
            Mode::Idle => self.idle.render(now, &mut self.grid, &mut self.rng),
            Mode::FadeTransition => {
                if self.fade.advance(now, &mut self.grid) == FadeProgress::Complete {
                    self.mode = Mode::Active;
                    self.patterns.start(now);
                    self.patterns.render(now, &mut self.grid, &mut self.rng);
                }
            }
            Mode::Active => self.patterns.render(now, &mut self.grid, &mut self.rng),
        }

        self.filter.apply(self.grid.leds(), &mut self.output);
        &self.output
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Time of the last show trigger
    pub const fn last_run(&self) -> Instant {
        self.last_run
    }

    pub const fn fps(&self) -> u32 {
        self.fps
    }

    /// Duration of one frame at the configured rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Unscaled strip buffer
    pub const fn grid(&self) -> &PixelGrid<N, W, H> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut PixelGrid<N, W, H> {
        &mut self.grid
    }

    pub const fn patterns(&self) -> &PatternEngine<N, W, H> {
        &self.patterns
    }

    pub fn patterns_mut(&mut self) -> &mut PatternEngine<N, W, H> {
        &mut self.patterns
    }

    pub const fn fade(&self) -> &FadeTransition {
        &self.fade
    }

    pub fn status(&self, now: Instant) -> Status {
        Status {
            uptime: now,
            mode: self.mode,
            pattern: self.patterns.current(),
            pattern_duration: self.patterns.duration(),
            fps: self.fps,
        }
    }
}
