//! Bottom navigation bar with procedurally drawn icons.
//!
//! Four equal slots on a black band. The selected slot's icon is pink, the rest
//! gray. Icons are built from arcs, circles and lines inside a
//! `NAV_ICON_SIZE` square so no image assets are needed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle};

use super::primitives::{fill_rect, polar};
use crate::colors::{BLACK, GRAY, PINK_80};
use crate::config::{NAV_HEIGHT, NAV_ICON_SIZE, NAV_ITEM_WIDTH, NAV_ITEMS, NAV_SELECTED, NAV_Y, SCREEN_WIDTH};

/// Navigation bar bounds.
pub const NAV_AREA: Rectangle = Rectangle::new(Point::new(0, NAV_Y), Size::new(SCREEN_WIDTH, NAV_HEIGHT));

/// Stroke width for icon outlines.
const ICON_STROKE: u32 = 2;

/// Half the icon box, the radius budget for every icon.
const ICON_HALF: i32 = (NAV_ICON_SIZE / 2) as i32;

/// Navigation destinations, in bar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Wifi,
    Person,
    Speed,
    Settings,
}

impl NavIcon {
    /// All icons in bar order.
    pub const ALL: [Self; NAV_ITEMS as usize] = [Self::Wifi, Self::Person, Self::Speed, Self::Settings];

    /// Draw the icon centered on `center`.
    pub fn draw<D>(
        self,
        display: &mut D,
        center: Point,
        color: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let stroke = PrimitiveStyle::with_stroke(color, ICON_STROKE);
        let fill = PrimitiveStyle::with_fill(color);

        match self {
            Self::Wifi => {
                // Three bands fanning upward from a dot near the bottom
                let origin = center + Point::new(0, ICON_HALF - 3);
                for diameter in [6, 14, 22] {
                    Arc::with_center(origin, diameter, 225.0.deg(), 90.0.deg())
                        .into_styled(stroke)
                        .draw(display)
                        .ok();
                }
                Circle::with_center(origin, 3).into_styled(fill).draw(display).ok();
            }
            Self::Person => {
                Circle::with_center(center - Point::new(0, 4), 8)
                    .into_styled(fill)
                    .draw(display)
                    .ok();
                Arc::with_center(center + Point::new(0, ICON_HALF - 2), 16, 180.0.deg(), 180.0.deg())
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
            Self::Speed => {
                // Miniature dial with the needle past the middle
                let pivot = center + Point::new(0, 2);
                Arc::with_center(pivot, NAV_ICON_SIZE - 2, 150.0.deg(), 240.0.deg())
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
                Line::new(pivot, polar(pivot, (ICON_HALF - 4) as f32, 315.0))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
                Circle::with_center(pivot, 4).into_styled(fill).draw(display).ok();
            }
            Self::Settings => {
                // Gear: ring plus eight teeth
                Circle::with_center(center, 12).into_styled(stroke).draw(display).ok();
                for tooth in 0..8 {
                    let angle = tooth as f32 * 45.0;
                    Line::new(
                        polar(center, 6.0, angle),
                        polar(center, (ICON_HALF - 1) as f32, angle),
                    )
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
                }
            }
        }
    }
}

/// Center of navigation slot `index`.
#[inline]
pub const fn nav_item_center(index: usize) -> Point {
    Point::new(
        (NAV_ITEM_WIDTH as i32) * index as i32 + (NAV_ITEM_WIDTH / 2) as i32,
        NAV_Y + (NAV_HEIGHT / 2) as i32,
    )
}

/// Draw the navigation bar with `selected` highlighted.
pub fn draw_nav_bar<D>(
    display: &mut D,
    selected: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, NAV_AREA, BLACK);
    for (index, icon) in NavIcon::ALL.into_iter().enumerate() {
        let color = if index == selected { PINK_80 } else { GRAY };
        icon.draw(display, nav_item_center(index), color);
    }
}

/// Draw the navigation bar with the speed-test slot selected.
#[inline]
pub fn draw_default_nav_bar<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_nav_bar(display, NAV_SELECTED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::test_display::TestDisplay;

    fn slot(index: usize) -> Rectangle {
        Rectangle::with_center(nav_item_center(index), Size::new(NAV_ITEM_WIDTH, NAV_HEIGHT))
    }

    #[test]
    fn test_item_centers() {
        assert_eq!(nav_item_center(0), Point::new(30, NAV_Y + 20));
        assert_eq!(nav_item_center(3), Point::new(210, NAV_Y + 20));
    }

    #[test]
    fn test_speed_item_selected() {
        assert_eq!(NavIcon::ALL[NAV_SELECTED], NavIcon::Speed);

        let mut display = TestDisplay::screen();
        draw_default_nav_bar(&mut display);

        for index in 0..NAV_ITEMS as usize {
            let pink = display.count_in(&slot(index), |c| c == PINK_80);
            let gray = display.count_in(&slot(index), |c| c == GRAY);
            if index == NAV_SELECTED {
                assert!(pink > 0 && gray == 0, "Selected icon should be pink");
            } else {
                assert!(gray > 0 && pink == 0, "Icon {index} should be gray");
            }
        }
    }

    #[test]
    fn test_icons_stay_in_their_box() {
        for icon in NavIcon::ALL {
            let mut display = TestDisplay::new(Size::new(40, 40));
            let center = Point::new(20, 20);
            icon.draw(&mut display, center, WHITE);
            let icon_box = Rectangle::with_center(center, Size::new(NAV_ICON_SIZE + 4, NAV_ICON_SIZE + 4));
            assert!(display.count(WHITE) > 0, "{icon:?} draws something");
            assert_eq!(display.count_outside(&icon_box, |c| c == WHITE), 0, "{icon:?} overflows its box");
        }
    }

    #[test]
    fn test_nav_bar_stays_in_band() {
        let mut display = TestDisplay::screen();
        draw_nav_bar(&mut display, 0);
        assert_eq!(display.count_outside(&NAV_AREA, |c| c != BLACK), 0);
    }
}
