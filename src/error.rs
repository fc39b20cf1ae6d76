use core::{
    error::Error,
    fmt::{Display, Formatter},
};

/// A command byte outside the serial protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCommand(pub u8);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown command: {}", self.0)
    }
}

impl Error for UnknownCommand {}

/// Rejected engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Frame rate must be at least 1
    ZeroFps,
    /// The fade needs at least one step
    ZeroFadeSteps,
    /// Pattern durations must be non-zero
    ZeroPatternDuration,
    /// `pattern_duration_min` is above `pattern_duration_max`
    InvertedPatternDuration,
    /// Spawn densities are expressed out of 10 000
    DensityOutOfRange(u16),
    /// A trail length of 255 never decays
    EndlessTrail,
    /// Simulation step period must be non-zero
    ZeroSpeed,
    /// Idle sparkle period must be non-zero
    ZeroSparkleInterval,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroFps => f.write_str("fps must be at least 1"),
            Self::ZeroFadeSteps => f.write_str("fade needs at least one step"),
            Self::ZeroPatternDuration => f.write_str("pattern duration must be non-zero"),
            Self::InvertedPatternDuration => {
                f.write_str("pattern_duration_min is greater than pattern_duration_max")
            }
            Self::DensityOutOfRange(density) => {
                write!(f, "density {} is above 10000", density)
            }
            Self::EndlessTrail => f.write_str("trail_length must be below 255"),
            Self::ZeroSpeed => f.write_str("simulation speed must be non-zero"),
            Self::ZeroSparkleInterval => f.write_str("sparkle interval must be non-zero"),
        }
    }
}

impl Error for ConfigError {}
