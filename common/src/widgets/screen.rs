//! Full speed-test screen composition.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::button::draw_start_button;
use super::header::draw_header;
use super::info::{draw_info_chrome, draw_info_values};
use super::nav::draw_default_nav_bar;
use super::readout::draw_readout;
use crate::colors::SCREEN_BG;
use crate::dial::{DialStats, draw_dial};
use crate::display_state::DisplayState;
use crate::render::RenderState;

/// What [`draw_speedtest_screen`] redrew this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenStats {
    /// Static chrome (header, info titles, nav bar) was drawn.
    pub chrome: bool,
    /// Dial counters, if the dynamic regions were redrawn.
    pub dial: Option<DialStats>,
}

/// Render one frame of the speed-test screen for `state`.
///
/// Static chrome is drawn when `render_state` asks for it. The dial, readout,
/// START button and info values are redrawn only when `state` differs from the
/// last frame. Call [`RenderState::end_frame`] after presenting the frame.
pub fn draw_speedtest_screen<D>(
    display: &mut D,
    state: &DisplayState,
    render_state: &mut RenderState,
) -> ScreenStats
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut stats = ScreenStats::default();

    if render_state.need_chrome() {
        draw_header(display, SCREEN_BG);
        draw_info_chrome(display, SCREEN_BG);
        draw_default_nav_bar(display);
        render_state.mark_chrome_drawn();
        stats.chrome = true;
    }

    if render_state.check_state_dirty(state) {
        let dial = draw_dial(display, state.progress, SCREEN_BG);
        draw_readout(display, &state.speed);
        draw_start_button(display, state.button_enabled(), SCREEN_BG);
        draw_info_values(display, &state.ping, &state.max_speed, SCREEN_BG);
        stats.dial = Some(dial);
    }

    stats
}
