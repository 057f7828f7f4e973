//! Speed readout in the middle of the dial.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::{READOUT_CAPTION_POS, READOUT_UNIT_POS, READOUT_VALUE_POS};
use crate::styles::{CAPTION_STYLE, CENTERED, SPEED_STYLE};

/// Caption above the value.
pub const READOUT_CAPTION: &str = "DOWNLOAD";

/// Unit below the value.
pub const READOUT_UNIT: &str = "mbps";

/// Draw "DOWNLOAD", the speed value and "mbps", stacked and centered on the dial.
///
/// Draws text only; the dial repaint underneath clears the previous value.
pub fn draw_readout<D>(
    display: &mut D,
    speed: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(READOUT_CAPTION, READOUT_CAPTION_POS, CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(speed, READOUT_VALUE_POS, SPEED_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(READOUT_UNIT, READOUT_UNIT_POS, CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}
