//! Ambient sparkle shown between shows
//!
//! A slowly rotating four stop gradient (black, dark, pure and whitened hue)
//! is sampled at random positions every burst, while the whole matrix fades.

use embassy_time::Instant;
use rand::{Rng, RngCore};

use super::Pattern;
use crate::{
    color::{BLACK, Rgb, hsv, sample_gradient},
    config::IdleConfig,
    grid::PixelGrid,
    timer::Timer,
};

#[derive(Debug, Clone)]
pub struct IdleSparkle {
    hue: u8,
    burst: Timer,
    sparkle_count: u8,
    fade: u8,
}

impl IdleSparkle {
    pub const fn new(config: &IdleConfig, now: Instant) -> Self {
        Self {
            hue: 0,
            burst: Timer::new(now, config.sparkle_interval),
            sparkle_count: config.sparkle_count,
            fade: config.fade,
        }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    /// Gradient stops for the current hue
    pub fn palette(&self) -> [Rgb; 4] {
        [
            BLACK,
            hsv(self.hue, 255, 192),
            hsv(self.hue, 255, 255),
            hsv(self.hue, 200, 255),
        ]
    }
}

impl<const N: usize, const W: usize, const H: usize> Pattern<N, W, H> for IdleSparkle {
    fn render(&mut self, now: Instant, grid: &mut PixelGrid<N, W, H>, rng: &mut dyn RngCore) {
        self.hue = self.hue.wrapping_add(1);
        grid.fade_to_black_by(self.fade);

        if N == 0 || !self.burst.poll(now) {
            return;
        }

        let palette = self.palette();
        let leds = grid.leds_mut();
        for _ in 0..self.sparkle_count {
            let index = rng.gen_range(0..N);
            leds[index] = sample_gradient(&palette, rng.gen_range(0..=u8::MAX));
        }
    }
}
