//! Engine tunables
//!
//! All knobs are fixed at construction time. Defaults match the
//! installation the engine was written for: a 30×37 matrix running at
//! 120 FPS with a three second fade into the show.

use embassy_time::Duration;

use crate::error::ConfigError;

/// Default global output brightness
pub const DEFAULT_BRIGHTNESS: u8 = 255;
/// Default target frame rate
pub const DEFAULT_FPS: u32 = 120;
/// Default fade-to-black duration when a show starts
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(3000);
/// Default number of fade steps
pub const DEFAULT_FADE_STEPS: u16 = 250;
/// Default lower bound of a show pattern's run time
pub const DEFAULT_PATTERN_DURATION_MIN: Duration = Duration::from_secs(3);
/// Default upper bound of a show pattern's run time
pub const DEFAULT_PATTERN_DURATION_MAX: Duration = Duration::from_secs(15);

/// Spawn probabilities are expressed per this many cells
pub const DENSITY_SCALE: u16 = 10_000;

/// Fade into the show
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    /// Total time from trigger until the buffer is black
    pub duration: Duration,
    /// Number of linear decrements spread over `duration`
    pub steps: u16,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FADE_DURATION,
            steps: DEFAULT_FADE_STEPS,
        }
    }
}

/// Pattern rotation during the show
#[derive(Debug, Clone, Copy)]
pub struct ShowConfig {
    pub pattern_duration_min: Duration,
    pub pattern_duration_max: Duration,
    /// Include the Game of Life in the rotation
    pub life_enabled: bool,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            pattern_duration_min: DEFAULT_PATTERN_DURATION_MIN,
            pattern_duration_max: DEFAULT_PATTERN_DURATION_MAX,
            life_enabled: true,
        }
    }
}

/// Game of Life parameters
#[derive(Debug, Clone, Copy)]
pub struct LifeConfig {
    /// Per-cell spontaneous birth chance per step, out of 10 000
    pub density: u16,
    /// Density used for the single refill step after the population collapses
    pub bootstrap_density: u16,
    /// Higher values leave longer afterglow; a dead cell loses
    /// `255 - trail_length` brightness per step
    pub trail_length: u8,
    /// Global hue advance per step
    pub hue_speed: u8,
    /// Time between generations
    pub speed: Duration,
    /// Saturation given to newborn cells
    pub saturation: u8,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            density: 10,
            bootstrap_density: 2_500,
            trail_length: 230,
            hue_speed: 1,
            speed: Duration::from_millis(80),
            saturation: 255,
        }
    }
}

/// Ambient sparkle shown while idle
#[derive(Debug, Clone, Copy)]
pub struct IdleConfig {
    /// Time between sparkle bursts
    pub sparkle_interval: Duration,
    /// LEDs lit per burst
    pub sparkle_count: u8,
    /// Per-frame `fade_to_black_by` amount
    pub fade: u8,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            sparkle_interval: Duration::from_millis(100),
            sparkle_count: 50,
            fade: 10,
        }
    }
}

/// Configuration for the whole engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Output brightness applied on the way to the driver
    pub brightness: u8,
    pub fps: u32,
    pub fade: FadeConfig,
    pub show: ShowConfig,
    pub life: LifeConfig,
    pub idle: IdleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            fps: DEFAULT_FPS,
            fade: FadeConfig::default(),
            show: ShowConfig::default(),
            life: LifeConfig::default(),
            idle: IdleConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Check the configuration for values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.fade.steps == 0 {
            return Err(ConfigError::ZeroFadeSteps);
        }
        self.show.validate()?;
        self.life.validate()?;
        if self.idle.sparkle_interval.as_ticks() == 0 {
            return Err(ConfigError::ZeroSparkleInterval);
        }
        Ok(())
    }
}

impl ShowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern_duration_min.as_ticks() == 0 {
            return Err(ConfigError::ZeroPatternDuration);
        }
        if self.pattern_duration_min > self.pattern_duration_max {
            return Err(ConfigError::InvertedPatternDuration);
        }
        Ok(())
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for density in [self.density, self.bootstrap_density] {
            if density > DENSITY_SCALE {
                return Err(ConfigError::DensityOutOfRange(density));
            }
        }
        if self.trail_length == u8::MAX {
            return Err(ConfigError::EndlessTrail);
        }
        if self.speed.as_ticks() == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(())
    }
}
