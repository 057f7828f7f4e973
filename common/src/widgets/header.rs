//! Title band at the top of the screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::fill_rect;
use crate::config::{HEADER_HEIGHT, SCREEN_WIDTH, TITLE_POS};
use crate::styles::{CENTERED, TITLE_STYLE};

/// Screen title.
pub const TITLE: &str = "SPEEDTEST";

/// Header band bounds.
pub const HEADER_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Draw the header band: background and centered title.
pub fn draw_header<D>(
    display: &mut D,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, HEADER_AREA, background);
    Text::with_text_style(TITLE, TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
}
