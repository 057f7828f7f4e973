//! START button: gray rounded outline with a white centered label.
//!
//! While a run is active the button is disabled and both outline and label are
//! drawn at 38% opacity over the background, the usual disabled-content level for
//! outlined buttons.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, RoundedRectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::colors::{GRAY, WHITE, blend};
use crate::config::START_BUTTON_AREA;
use crate::styles::{BUTTON_FONT, CENTERED};

/// Button label.
pub const START_LABEL: &str = "START";

/// Opacity of disabled content.
pub const DISABLED_ALPHA: f32 = 0.38;

/// Outline stroke width.
pub const BORDER_WIDTH: u32 = 2;

/// Corner radius of the outline (fully rounded ends).
const CORNER_RADIUS: u32 = START_BUTTON_AREA.size.height / 2;

/// Label color for the given enabled state.
#[inline]
pub fn button_color(
    enabled: bool,
    background: Rgb565,
) -> Rgb565 {
    dimmed(WHITE, enabled, background)
}

/// Outline color for the given enabled state.
#[inline]
pub fn button_border_color(
    enabled: bool,
    background: Rgb565,
) -> Rgb565 {
    dimmed(GRAY, enabled, background)
}

fn dimmed(
    color: Rgb565,
    enabled: bool,
    background: Rgb565,
) -> Rgb565 {
    if enabled { color } else { blend(background, color, DISABLED_ALPHA) }
}

/// Draw the START button.
pub fn draw_start_button<D>(
    display: &mut D,
    enabled: bool,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(background)
        .stroke_color(button_border_color(enabled, background))
        .stroke_width(BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    RoundedRectangle::with_equal_corners(START_BUTTON_AREA, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(style)
        .draw(display)
        .ok();

    Text::with_text_style(
        START_LABEL,
        START_BUTTON_AREA.center(),
        MonoTextStyle::new(BUTTON_FONT, button_color(enabled, background)),
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Whether `point` (in display coordinates) lands on the START button.
#[inline]
pub fn start_button_hit(point: Point) -> bool { START_BUTTON_AREA.contains(point) }
