//! Output post-processing
//!
//! Patterns rely on the previous frame still being in the buffer (trails,
//! fades), so global brightness is applied to a copy on the way out rather
//! than to the grid itself.

use crate::{color::Rgb, math8::scale8};

/// Global brightness scaling (255 = unchanged)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Write `frame` scaled by the brightness into `output`
    pub fn apply(&self, frame: &[Rgb], output: &mut [Rgb]) {
        for (out, led) in output.iter_mut().zip(frame) {
            *out = Rgb {
                r: scale8(led.r, self.brightness),
                g: scale8(led.g, self.brightness),
                b: scale8(led.b, self.brightness),
            };
        }
    }
}
