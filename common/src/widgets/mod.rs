//! Widget components for the speed-test screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod button;
mod header;
mod info;
mod nav;
pub(crate) mod primitives;
mod readout;
mod screen;

pub use button::{START_LABEL, button_border_color, button_color, draw_start_button, start_button_hit};
pub use header::{HEADER_AREA, TITLE, draw_header};
pub use info::{INFO_AREA, INFO_TITLES, draw_info_chrome, draw_info_values};
pub use nav::{NAV_AREA, NavIcon, draw_default_nav_bar, draw_nav_bar, nav_item_center};
pub use readout::{READOUT_CAPTION, READOUT_UNIT, draw_readout};
pub use screen::{ScreenStats, draw_speedtest_screen};
