#![no_std]

pub mod color;
pub mod command;
pub mod command_queue;
pub mod config;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod grid;
pub mod math8;
pub mod pattern;
pub mod renderer;
pub mod timer;
pub mod transition;

pub use command::{Command, CommandSource};
pub use command_queue::{CommandQueue, CommandReader, CommandWriter, QueueFull};
pub use config::{EngineConfig, FadeConfig, IdleConfig, LifeConfig, ShowConfig};
pub use error::{ConfigError, UnknownCommand};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use grid::{PixelGrid, serpentine_index};
pub use pattern::{LifeSimulation, PatternEngine, PatternId, WaveDirection};
pub use renderer::{Mode, Renderer, Status};
pub use timer::Timer;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to the physical strip.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip, in wiring order
    fn write(&mut self, colors: &[Rgb]);
}
