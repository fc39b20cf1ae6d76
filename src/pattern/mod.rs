//! Show patterns with compile-time known variants
//!
//! Every generator is created once and owned by the [`PatternEngine`], so
//! cursors and the Life world persist across pattern switches and across
//! idle periods. Selection is by [`PatternId`].

mod idle;
mod life;
mod wave;

use embassy_time::{Duration, Instant};
use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use idle::IdleSparkle;
pub use life::{Cell, LifeSimulation, MIN_POPULATION};
pub use wave::{PatternState, WaveDirection, WaveGenerator, trail_fade};

use crate::{
    config::{LifeConfig, ShowConfig},
    grid::PixelGrid,
    timer::Timer,
};

const PATTERN_NAME_WAVE_UP: &str = "wave_up";
const PATTERN_NAME_WAVE_DOWN: &str = "wave_down";
const PATTERN_NAME_WAVE_LEFT: &str = "wave_left";
const PATTERN_NAME_WAVE_RIGHT: &str = "wave_right";
const PATTERN_NAME_LIFE: &str = "life";

const PATTERN_ID_WAVE_UP: u8 = 0;
const PATTERN_ID_WAVE_DOWN: u8 = 1;
const PATTERN_ID_WAVE_LEFT: u8 = 2;
const PATTERN_ID_WAVE_RIGHT: u8 = 3;
const PATTERN_ID_LIFE: u8 = 4;

/// Number of wave generators
const WAVE_COUNT: u8 = 4;

/// A frame generator drawing into a `W`×`H` grid
pub trait Pattern<const N: usize, const W: usize, const H: usize> {
    /// Render a single frame
    fn render(&mut self, now: Instant, grid: &mut PixelGrid<N, W, H>, rng: &mut dyn RngCore);
}

/// Known show patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    WaveUp = PATTERN_ID_WAVE_UP,
    WaveDown = PATTERN_ID_WAVE_DOWN,
    WaveLeft = PATTERN_ID_WAVE_LEFT,
    WaveRight = PATTERN_ID_WAVE_RIGHT,
    Life = PATTERN_ID_LIFE,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_WAVE_UP => Self::WaveUp,
            PATTERN_ID_WAVE_DOWN => Self::WaveDown,
            PATTERN_ID_WAVE_LEFT => Self::WaveLeft,
            PATTERN_ID_WAVE_RIGHT => Self::WaveRight,
            PATTERN_ID_LIFE => Self::Life,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaveUp => PATTERN_NAME_WAVE_UP,
            Self::WaveDown => PATTERN_NAME_WAVE_DOWN,
            Self::WaveLeft => PATTERN_NAME_WAVE_LEFT,
            Self::WaveRight => PATTERN_NAME_WAVE_RIGHT,
            Self::Life => PATTERN_NAME_LIFE,
        }
    }

    /// Direction of the wave generator behind this id
    pub const fn wave_direction(self) -> Option<WaveDirection> {
        match self {
            Self::WaveUp => Some(WaveDirection::Up),
            Self::WaveDown => Some(WaveDirection::Down),
            Self::WaveLeft => Some(WaveDirection::Left),
            Self::WaveRight => Some(WaveDirection::Right),
            Self::Life => None,
        }
    }
}

/// Draw a uniformly random duration within `[min, max]`
pub fn random_duration(rng: &mut dyn RngCore, min: Duration, max: Duration) -> Duration {
    let min_ticks = min.as_ticks();
    let max_ticks = max.as_ticks().max(min_ticks);
    Duration::from_ticks(rng.gen_range(min_ticks..=max_ticks))
}

/// Owner of all show generators and the rotation timer
#[derive(Debug, Clone)]
pub struct PatternEngine<const N: usize, const W: usize, const H: usize> {
    waves: [WaveGenerator; WAVE_COUNT as usize],
    life: LifeSimulation<N, W, H>,
    current: PatternId,
    duration: Duration,
    rotation: Timer,
    config: ShowConfig,
}

impl<const N: usize, const W: usize, const H: usize> PatternEngine<N, W, H> {
    pub fn new(show: &ShowConfig, life: &LifeConfig, now: Instant) -> Self {
        Self {
            waves: [
                WaveGenerator::new(WaveDirection::Up, W, H),
                WaveGenerator::new(WaveDirection::Down, W, H),
                WaveGenerator::new(WaveDirection::Left, W, H),
                WaveGenerator::new(WaveDirection::Right, W, H),
            ],
            life: LifeSimulation::new(life, now),
            current: PatternId::WaveUp,
            duration: show.pattern_duration_min,
            rotation: Timer::new(now, show.pattern_duration_min),
            config: *show,
        }
    }

    /// Pattern currently on screen
    pub const fn current(&self) -> PatternId {
        self.current
    }

    /// Run time chosen for the current pattern
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn rotation(&self) -> &Timer {
        &self.rotation
    }

    pub const fn life(&self) -> &LifeSimulation<N, W, H> {
        &self.life
    }

    pub fn life_mut(&mut self) -> &mut LifeSimulation<N, W, H> {
        &mut self.life
    }

    pub fn wave(&self, direction: WaveDirection) -> &WaveGenerator {
        &self.waves[Self::wave_slot(direction)]
    }

    const fn wave_slot(direction: WaveDirection) -> usize {
        match direction {
            WaveDirection::Up => 0,
            WaveDirection::Down => 1,
            WaveDirection::Left => 2,
            WaveDirection::Right => 3,
        }
    }

    /// Number of patterns the rotation draws from
    pub const fn available(&self) -> u8 {
        if self.config.life_enabled {
            WAVE_COUNT + 1
        } else {
            WAVE_COUNT
        }
    }

    /// Pick a fresh pattern and run time without touching the timer
    pub fn reseed(&mut self, rng: &mut dyn RngCore) {
        let raw = rng.gen_range(0..self.available());
        self.current = PatternId::from_raw(raw).unwrap_or(PatternId::WaveUp);
        self.duration = random_duration(
            rng,
            self.config.pattern_duration_min,
            self.config.pattern_duration_max,
        );
    }

    /// Start the current pattern's run time at `now`
    pub fn start(&mut self, now: Instant) {
        self.rotation.rearm(now, self.duration);
    }

    /// Force a specific pattern
    pub fn select(&mut self, id: PatternId) {
        self.current = id;
    }

    /// Render the current pattern, then rotate if its run time is over
    pub fn render(&mut self, now: Instant, grid: &mut PixelGrid<N, W, H>, rng: &mut dyn RngCore) {
        match self.current.wave_direction() {
            Some(direction) => self.waves[Self::wave_slot(direction)].render(now, grid, rng),
            None => self.life.render(now, grid, rng),
        }

        if self.rotation.due(now) {
            self.reseed(rng);
            self.start(now);

            #[cfg(feature = "esp32-log")]
            println!(
                "switching to pattern index {} for {}ms",
                self.current as u8,
                self.duration.as_millis()
            );
        }
    }
}
