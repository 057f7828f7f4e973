//! PING | MAX SPEED info row under the dial.
//!
//! ```text
//! ┌────────────┬─────────────┐
//! │    PING    │  MAX SPEED  │  titles (chrome, drawn once)
//! │   12 ms    │  89.0 mbps  │  values (redrawn on change)
//! └────────────┴─────────────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use super::primitives::fill_rect;
use crate::colors::DIVIDER;
use crate::config::{CENTER_X, INFO_COLUMN_WIDTH, INFO_HEIGHT, INFO_TITLE_DY, INFO_VALUE_DY, INFO_Y, SCREEN_WIDTH};
use crate::styles::{CAPTION_STYLE, CENTERED, INFO_VALUE_STYLE};

/// Column titles, left to right.
pub const INFO_TITLES: [&str; 2] = ["PING", "MAX SPEED"];

/// Info row bounds.
pub const INFO_AREA: Rectangle = Rectangle::new(Point::new(0, INFO_Y), Size::new(SCREEN_WIDTH, INFO_HEIGHT));

/// Vertical inset of the divider from the row edges.
const DIVIDER_INSET: i32 = 4;

/// Height of the box cleared behind a value.
const VALUE_BOX_HEIGHT: u32 = 16;

/// Horizontal center of column `col`.
#[inline]
const fn column_center(col: usize) -> i32 { (INFO_COLUMN_WIDTH as i32) * col as i32 + (INFO_COLUMN_WIDTH / 2) as i32 }

/// Box cleared before the value of column `col` is redrawn. Stays clear of the divider.
pub const fn value_box(col: usize) -> Rectangle {
    Rectangle::new(
        Point::new(
            (INFO_COLUMN_WIDTH as i32) * col as i32 + 1,
            INFO_Y + INFO_VALUE_DY - (VALUE_BOX_HEIGHT / 2) as i32,
        ),
        Size::new(INFO_COLUMN_WIDTH - 2, VALUE_BOX_HEIGHT),
    )
}

/// Draw the static parts of the row: background, titles and divider.
pub fn draw_info_chrome<D>(
    display: &mut D,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, INFO_AREA, background);

    for (col, title) in INFO_TITLES.iter().enumerate() {
        Text::with_text_style(
            title,
            Point::new(column_center(col), INFO_Y + INFO_TITLE_DY),
            CAPTION_STYLE,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    Line::new(
        Point::new(CENTER_X, INFO_Y + DIVIDER_INSET),
        Point::new(CENTER_X, INFO_Y + INFO_HEIGHT as i32 - DIVIDER_INSET - 1),
    )
    .into_styled(PrimitiveStyle::with_stroke(DIVIDER, 1))
    .draw(display)
    .ok();
}

/// Redraw the ping and max speed values.
pub fn draw_info_values<D>(
    display: &mut D,
    ping: &str,
    max_speed: &str,
    background: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (col, value) in [ping, max_speed].into_iter().enumerate() {
        fill_rect(display, value_box(col), background);
        Text::with_text_style(
            value,
            Point::new(column_center(col), INFO_Y + INFO_VALUE_DY),
            INFO_VALUE_STYLE,
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}
