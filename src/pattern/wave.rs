//! Directional wave sweeps
//!
//! A one pixel wide line travels across the matrix, leaving a rainbow trail
//! that fades over roughly a quarter of the swept axis.

use embassy_time::Instant;
use rand::RngCore;

use super::Pattern;
use crate::{
    color::{RAINBOW_COLORS, color_from_palette},
    grid::PixelGrid,
};

/// Trail fade numerator: per-frame fade is `TRAIL_FADE_SPAN / axis_len`,
/// so the trail covers about a quarter of the axis on any grid size.
const TRAIL_FADE_SPAN: usize = 1024;

/// Direction of travel of the swept line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveDirection {
    /// Row line moving toward +y
    Up,
    /// Row line moving toward -y
    Down,
    /// Column line moving toward +x
    Left,
    /// Column line moving toward -x
    Right,
}

impl WaveDirection {
    /// Length of the axis the line travels along
    pub const fn axis_len(self, width: usize, height: usize) -> usize {
        match self {
            Self::Up | Self::Down => height,
            Self::Left | Self::Right => width,
        }
    }

    const fn is_forward(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }
}

/// Cursor and color offset of one generator.
///
/// Lives for the lifetime of the engine; leaving and re-entering the show
/// resumes the sweep where it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternState {
    /// Position of the line along the swept axis
    pub cursor: usize,
    /// Palette offset, advanced once per frame
    pub base_hue: u8,
}

/// Per-frame fade amount for a trail along an axis of `axis_len` pixels
#[allow(clippy::cast_possible_truncation)]
pub const fn trail_fade(axis_len: usize) -> u8 {
    if axis_len == 0 {
        return 255;
    }
    let fade = TRAIL_FADE_SPAN / axis_len;
    if fade < 1 {
        1
    } else if fade > 255 {
        255
    } else {
        fade as u8
    }
}

#[derive(Debug, Clone)]
pub struct WaveGenerator {
    direction: WaveDirection,
    state: PatternState,
}

impl WaveGenerator {
    /// Create a generator whose line starts at the near edge for its direction
    pub const fn new(direction: WaveDirection, width: usize, height: usize) -> Self {
        let axis_len = direction.axis_len(width, height);
        let cursor = if direction.is_forward() || axis_len == 0 {
            0
        } else {
            axis_len - 1
        };
        Self {
            direction,
            state: PatternState {
                cursor,
                base_hue: 0,
            },
        }
    }

    pub const fn direction(&self) -> WaveDirection {
        self.direction
    }

    pub const fn state(&self) -> PatternState {
        self.state
    }

    /// Step the cursor one pixel with wraparound at the axis bounds
    fn advance(&mut self, axis_len: usize) {
        let cursor = self.state.cursor;
        self.state.cursor = if self.direction.is_forward() {
            (cursor + 1) % axis_len
        } else if cursor == 0 {
            axis_len - 1
        } else {
            cursor - 1
        };
        self.state.base_hue = self.state.base_hue.wrapping_add(1);
    }
}

impl<const N: usize, const W: usize, const H: usize> Pattern<N, W, H> for WaveGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _now: Instant, grid: &mut PixelGrid<N, W, H>, _rng: &mut dyn RngCore) {
        let axis_len = self.direction.axis_len(W, H);
        if axis_len == 0 {
            return;
        }
        self.state.cursor %= axis_len;

        grid.fade_to_black_by(trail_fade(axis_len));

        // Truncating the cursor keeps the index modulo 256
        let index = self
            .state
            .base_hue
            .wrapping_add((self.state.cursor as u8).wrapping_mul(2));
        let color = color_from_palette(&RAINBOW_COLORS, index);

        match self.direction {
            WaveDirection::Up | WaveDirection::Down => grid.paint_row(self.state.cursor, color),
            WaveDirection::Left | WaveDirection::Right => {
                grid.paint_column(self.state.cursor, color);
            }
        }

        self.advance(axis_len);
    }
}
