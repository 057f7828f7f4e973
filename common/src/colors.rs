//! Color palette for the speed-test screen.
//!
//! The screen was designed against a 24-bit palette. Every token is declared here
//! from its hex value and quantized once, at compile time, to the RGB565 format the
//! display consumes natively.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The extra green bit is why greens keep noticeably more detail than reds and
//! blues, which matters for the glow around the dial arc.
//!
//! RGB565 has no alpha channel. Translucent strokes are produced with [`blend`],
//! which composites a color over a known background in 8-bit space.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Conversion
// =============================================================================

/// Quantize a `0xRRGGBB` value to RGB565 (truncating the low bits of each channel).
pub const fn from_hex(hex: u32) -> Rgb565 {
    Rgb565::new(
        ((hex >> 19) & 0x1F) as u8,
        ((hex >> 10) & 0x3F) as u8,
        ((hex >> 3) & 0x1F) as u8,
    )
}

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Navigation bar background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Title, readout values and button text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Screen Tokens
// =============================================================================

/// Screen background (deep navy behind the whole layout).
pub const SCREEN_BG: Rgb565 = from_hex(0x1A_22_3A);

/// Secondary text: "DOWNLOAD", units, info titles, unselected nav icons, button border.
pub const GRAY: Rgb565 = from_hex(0x88_88_88);

/// Vertical divider between the PING and MAX SPEED columns.
pub const DIVIDER: Rgb565 = from_hex(0x41_4D_66);

/// Dial tick marks.
pub const TICK: Rgb565 = from_hex(0x8C_9C_BE);

/// Selected navigation item.
pub const PINK_80: Rgb565 = from_hex(0xEF_B8_C8);

// =============================================================================
// Arc Tokens
// =============================================================================

/// Glow color composited around the arc.
pub const GREEN_200: Rgb565 = from_hex(0xA5_D6_A7);

/// Solid under-stroke beneath the gradient.
pub const GREEN_500: Rgb565 = from_hex(0x4C_AF_50);

/// First stop of the arc gradient (at the start of the span).
pub const GRADIENT_START: Rgb565 = from_hex(0x00_C8_53);

/// Last stop of the arc gradient (at the end of the span).
pub const GRADIENT_END: Rgb565 = from_hex(0xB2_FF_59);

// =============================================================================
// Blending
// =============================================================================

/// Composite `over` on top of `base` with the given opacity (0.0-1.0).
///
/// Channels are widened to 8 bits and mixed with 8-bit fixed-point weights, so very
/// small opacities still move the result instead of vanishing in the 5/6-bit
/// quantization.
pub fn blend(
    base: Rgb565,
    over: Rgb565,
    alpha: f32,
) -> Rgb565 {
    let t_fixed = (alpha.clamp(0.0, 1.0) * 256.0) as i32;

    let mix = |from: u8, to: u8| -> u8 {
        let from = i32::from(from);
        let to = i32::from(to);
        (from + (((to - from) * t_fixed) >> 8)).clamp(0, 255) as u8
    };

    let base = Rgb888::from(base);
    let over = Rgb888::from(over);
    Rgb565::from(Rgb888::new(
        mix(base.r(), over.r()),
        mix(base.g(), over.g()),
        mix(base.b(), over.b()),
    ))
}

/// Linear interpolation between two colors, `t = 0` gives `from`, `t = 1` gives `to`.
#[inline]
pub fn lerp(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    blend(from, to, t)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_primaries() {
        assert_eq!(from_hex(0xFF_FF_FF), Rgb565::WHITE);
        assert_eq!(from_hex(0x00_00_00), Rgb565::BLACK);
        assert_eq!(from_hex(0xFF_00_00), Rgb565::RED);
        assert_eq!(from_hex(0x00_FF_00), Rgb565::GREEN);
        assert_eq!(from_hex(0x00_00_FF), Rgb565::BLUE);
    }

    #[test]
    fn test_divider_token() {
        // 0x41 >> 3 = 8, 0x4D >> 2 = 19, 0x66 >> 3 = 12
        assert_eq!(DIVIDER, Rgb565::new(8, 19, 12));
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(BLACK, WHITE, 0.0), BLACK, "Zero alpha keeps the base");
        assert_eq!(blend(BLACK, WHITE, 1.0), WHITE, "Full alpha replaces the base");
        assert_eq!(blend(BLACK, WHITE, 7.0), WHITE, "Alpha above 1 is clamped");
        assert_eq!(blend(GREEN_500, WHITE, -1.0), GREEN_500, "Negative alpha is clamped");
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(BLACK, WHITE, 0.5);
        let mid888 = Rgb888::from(mid);
        assert!(mid888.r() > 100 && mid888.r() < 156, "Red should be near half, got {}", mid888.r());
        assert!(mid888.g() > 100 && mid888.g() < 156, "Green should be near half, got {}", mid888.g());
    }

    #[test]
    fn test_blend_small_alpha_moves_color() {
        // ~10% green over navy must be visible after RGB565 quantization
        let tinted = blend(SCREEN_BG, GREEN_200, 0.1);
        assert_ne!(tinted, SCREEN_BG);
    }

    #[test]
    fn test_lerp_stops() {
        assert_eq!(lerp(GRADIENT_START, GRADIENT_END, 0.0), GRADIENT_START);
        assert_eq!(lerp(GRADIENT_START, GRADIENT_END, 1.0), GRADIENT_END);
    }
}
