//! Palette lookups
//!
//! `Palette16` follows the `FastLED` 16-entry layout: the high nibble of
//! the index selects an entry and the low nibble blends toward the next one.

use crate::color::{Rgb, blend_colors, rgb_from_u32};

/// Sixteen evenly spaced palette entries
pub type Palette16 = [Rgb; 16];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

/// Rainbow palette used by the wave sweeps
#[allow(clippy::unreadable_literal)]
pub const RAINBOW_COLORS: Palette16 = hex_palette![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B
];

/// Look up a palette color with linear blending between entries.
///
/// The last entry blends back into the first, so the palette is cyclic.
pub fn color_from_palette(palette: &Palette16, index: u8) -> Rgb {
    let hi = usize::from(index >> 4);
    let lo = index & 0x0F;
    let entry = palette[hi];
    if lo == 0 {
        return entry;
    }
    let next = palette[(hi + 1) % palette.len()];
    blend_colors(entry, next, lo << 4)
}

/// Sample a gradient made of arbitrary color stops at position t (0-255)
#[allow(clippy::cast_possible_truncation)]
pub fn sample_gradient(stops: &[Rgb], t: u8) -> Rgb {
    // Map t (0-255) across N colors (N-1 segments) with blending.
    let segments = stops.len().saturating_sub(1);
    if segments == 0 {
        return stops.first().copied().unwrap_or(Rgb { r: 0, g: 0, b: 0 });
    }

    let scaled = u16::from(t) * (segments as u16);
    let segment = (scaled >> 8).min(segments.saturating_sub(1) as u16) as usize;
    let local_t = (scaled & 0xFF) as u8;

    blend_colors(stops[segment], stops[segment + 1], local_t)
}
