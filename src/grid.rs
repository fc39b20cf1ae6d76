//! Logical matrix coordinates on top of the physical LED strip.
//!
//! The matrix is driven by a single data line that runs column by column,
//! reversing direction on every column. Even columns are wired bottom-to-top,
//! odd columns top-to-bottom.

use crate::color::{BLACK, Rgb};
use crate::math8::dim8;

/// Map a logical `(x, y)` coordinate to its index on the serpentine strip.
///
/// `x` is the column (`0..width`), `y` the row (`0..height`).
#[inline]
pub const fn serpentine_index(x: usize, y: usize, height: usize) -> usize {
    if x % 2 == 0 {
        (x + 1) * height - 1 - y
    } else {
        x * height + y
    }
}

/// W×H pixel matrix backed by an N-long strip buffer.
///
/// `N` must equal `W * H`; this is checked at compile time when the grid
/// is constructed.
#[derive(Debug, Clone)]
pub struct PixelGrid<const N: usize, const W: usize, const H: usize> {
    leds: [Rgb; N],
}

impl<const N: usize, const W: usize, const H: usize> PixelGrid<N, W, H> {
    const SIZE_CHECK: () = assert!(N == W * H, "N must equal W * H");

    /// Create a dark grid
    pub const fn new() -> Self {
        let () = Self::SIZE_CHECK;
        Self { leds: [BLACK; N] }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        H
    }

    /// Strip index of the logical coordinate
    #[inline]
    pub const fn index(x: usize, y: usize) -> usize {
        serpentine_index(x, y, H)
    }

    /// Color at a logical coordinate
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.leds[Self::index(x, y)]
    }

    /// Set a pixel by logical coordinate. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < W && y < H {
            self.leds[Self::index(x, y)] = color;
        }
    }

    /// Paint the whole column `x`
    pub fn paint_column(&mut self, x: usize, color: Rgb) {
        for y in 0..H {
            self.set(x, y, color);
        }
    }

    /// Paint the whole row `y`
    pub fn paint_row(&mut self, y: usize, color: Rgb) {
        for x in 0..W {
            self.set(x, y, color);
        }
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    /// Dim every pixel by `amount / 256` (`fadeToBlackBy` semantics)
    pub fn fade_to_black_by(&mut self, amount: u8) {
        for led in &mut self.leds {
            *led = Rgb {
                r: dim8(led.r, amount),
                g: dim8(led.g, amount),
                b: dim8(led.b, amount),
            };
        }
    }

    /// Subtract `step` from every channel, clamping at zero
    pub fn fade_linear(&mut self, step: u8) {
        for led in &mut self.leds {
            led.r = led.r.saturating_sub(step);
            led.g = led.g.saturating_sub(step);
            led.b = led.b.saturating_sub(step);
        }
    }

    /// Whether every channel of every pixel is zero
    pub fn is_dark(&self) -> bool {
        self.leds.iter().all(|led| *led == BLACK)
    }

    /// Strip-ordered buffer
    pub fn leds(&self) -> &[Rgb; N] {
        &self.leds
    }

    /// Mutable strip-ordered buffer
    pub fn leds_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.leds
    }
}

impl<const N: usize, const W: usize, const H: usize> Default for PixelGrid<N, W, H> {
    fn default() -> Self {
        Self::new()
    }
}
