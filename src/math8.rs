//! 8-bit color math in the style of `FastLED`'s `lib8tion`.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// `scale8(v, 255) == v` for every `v`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Per-channel amount that dims a value by `amount / 256`.
///
/// Mirrors `fadeToBlackBy`: the value is scaled by `255 - amount`,
/// so any non-zero input loses at least one unit.
#[inline]
pub const fn dim8(value: u8, amount: u8) -> u8 {
    scale8(value, 255 - amount)
}
