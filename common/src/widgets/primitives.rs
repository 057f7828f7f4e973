//! Low-level drawing primitives shared across widgets.
//!
//! Angles follow embedded-graphics: degrees, 0° at 3 o'clock, increasing clockwise
//! (y grows downward on the display).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, Rectangle};
use micromath::F32;

/// Round to the nearest pixel coordinate, halves away from zero.
#[inline]
pub fn round_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Point at `radius` from `center` in direction `angle_deg`.
pub fn polar(
    center: Point,
    radius: f32,
    angle_deg: f32,
) -> Point {
    let rad = angle_deg.to_radians();
    let dx = F32(rad).cos().0 * radius;
    let dy = F32(rad).sin().0 * radius;
    Point::new(center.x + round_i32(dx), center.y + round_i32(dy))
}

/// Fill a rectangle with a solid color.
pub fn fill_rect<D>(
    display: &mut D,
    area: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a stroked arc with round caps.
///
/// embedded-graphics arcs end flat, so a filled disc as wide as the stroke is
/// placed on each end. Nothing is drawn for a non-positive sweep or zero width.
pub fn draw_round_arc<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    start_deg: f32,
    sweep_deg: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if sweep_deg <= 0.0 || width == 0 {
        return;
    }

    Arc::with_center(center, diameter, start_deg.deg(), sweep_deg.deg())
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();

    draw_cap(display, center, diameter, start_deg, width, color);
    draw_cap(display, center, diameter, start_deg + sweep_deg, width, color);
}

/// Draw one round cap of an arc stroke.
pub fn draw_cap<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    angle_deg: f32,
    width: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let end = polar(center, diameter as f32 / 2.0, angle_deg);
    Circle::with_center(end, width)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================
