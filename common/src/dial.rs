//! Procedural dial: radial ticks plus a glowing progress arc.
//!
//! # Geometry
//!
//! The dial covers `span` degrees centered on 12 o'clock. With the default 240°
//! span it starts at 150° (lower left) and ends at 390° ≡ 30° (lower right):
//!
//! ```text
//!               270°
//!          ╭ ─ ─ ┼ ─ ─ ╮
//!        ╱       │       ╲
//!  180° ┼        ●        ┼ 0°
//!        ╲               ╱
//!     150° ●─ start   end ─● 30°
//! ```
//!
//! - `start = 270 - span / 2`
//! - `sweep = span * progress`
//! - tick `i` (of `0..=N`) sits at `start + i * span / N` on the canvas rim
//!
//! # Ticks
//!
//! Ticks the arc has already passed are not drawn: indices below
//! `floor(progress * N) + 1` are skipped (nothing is skipped at progress 0). Every
//! fifth tick is long.
//!
//! # Arc Passes
//!
//! 1. **Glow**: 21 strokes, widest first, each `GLOW_WIDTH_STEP` narrower than the
//!    last, with opacity `i / 900`. RGB565 has no alpha, so each pass's opacity is
//!    folded into a running coverage value and the pass is painted with the
//!    background/glow mix for that coverage. Narrow passes land on top of wide ones,
//!    which reproduces stacked translucent strokes over a flat background.
//! 2. **Under-stroke**: solid `GREEN_500`, slightly wider than the top stroke.
//! 3. **Gradient**: short segments whose color depends on their angle within the
//!    full span, so the gradient stays fixed in place as the arc grows.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Line, PrimitiveStyle};

use crate::colors::{GRADIENT_END, GRADIENT_START, GREEN_200, GREEN_500, TICK, blend, lerp};
use crate::config::{
    ARC_DIAMETER,
    ARC_STROKE,
    ARC_UNDER_STROKE,
    CANVAS_RADIUS,
    DIAL_AREA,
    DIAL_CENTER,
    DIAL_SPAN_DEG,
    GLOW_ALPHA_DIVISOR,
    GLOW_PASSES,
    GLOW_WIDTH_STEP,
    GRADIENT_SEGMENT_DEG,
    TICK_COUNT,
    TICK_LONG,
    TICK_MAJOR_EVERY,
    TICK_SHORT,
    TICK_WIDTH,
};
use crate::widgets::primitives::{draw_cap, draw_round_arc, fill_rect, polar};

/// Overlap between gradient segments so rasterization leaves no seams.
const SEGMENT_OVERLAP_DEG: f32 = 0.75;

// =============================================================================
// Geometry
// =============================================================================

/// Angle where the dial (and the arc) starts.
#[inline]
pub const fn start_angle_deg(span_deg: f32) -> f32 { 270.0 - span_deg / 2.0 }

/// Angular length of the arc for a progress value.
#[inline]
pub fn sweep_angle_deg(
    progress: f32,
    span_deg: f32,
) -> f32 {
    span_deg * progress
}

/// Number of leading ticks hidden behind the arc.
#[inline]
pub fn tick_skip_count(
    progress: f32,
    tick_count: u32,
) -> u32 {
    if progress <= 0.0 {
        0
    } else {
        (progress * tick_count as f32) as u32 + 1
    }
}

/// Angle of tick `index`.
#[inline]
pub fn tick_angle_deg(
    index: u32,
    tick_count: u32,
    span_deg: f32,
) -> f32 {
    start_angle_deg(span_deg) + index as f32 * span_deg / tick_count as f32
}

/// Every `TICK_MAJOR_EVERY`-th tick is drawn long.
#[inline]
pub const fn is_major_tick(index: u32) -> bool { index % TICK_MAJOR_EVERY == 0 }

/// One tick mark, from the canvas rim inward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub index: u32,
    pub outer: Point,
    pub inner: Point,
    pub major: bool,
}

/// Ticks still visible at `progress`, in index order.
pub fn visible_ticks(
    progress: f32,
    center: Point,
    tick_count: u32,
    span_deg: f32,
) -> impl Iterator<Item = Tick> {
    let first = tick_skip_count(progress, tick_count);
    (first..=tick_count).map(move |index| {
        let angle = tick_angle_deg(index, tick_count, span_deg);
        let major = is_major_tick(index);
        let length = if major { TICK_LONG } else { TICK_SHORT };
        Tick {
            index,
            outer: polar(center, CANVAS_RADIUS as f32, angle),
            inner: polar(center, (CANVAS_RADIUS - length) as f32, angle),
            major,
        }
    })
}

/// Width and opacity of glow pass `pass` (`0..GLOW_PASSES`, widest first).
#[inline]
pub fn glow_pass(pass: u32) -> (u32, f32) {
    let width = ARC_STROKE + (GLOW_PASSES - 1 - pass) * GLOW_WIDTH_STEP;
    let alpha = pass as f32 / GLOW_ALPHA_DIVISOR;
    (width, alpha)
}

/// Gradient color at `angle_deg`, positioned within the full span.
pub fn gradient_color(
    angle_deg: f32,
    span_deg: f32,
) -> Rgb565 {
    let t = (angle_deg - start_angle_deg(span_deg)) / span_deg;
    lerp(GRADIENT_START, GRADIENT_END, t)
}

// =============================================================================
// Drawing
// =============================================================================

/// Counters reported by [`draw_dial`] for profiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialStats {
    pub ticks_drawn: u32,
    pub glow_passes: u32,
    pub gradient_segments: u32,
}

/// Redraw the whole dial area: background, ticks, then the arc passes.
///
/// All drawing is clipped to [`DIAL_AREA`]; the widest glow passes spill past the
/// dial and would otherwise paint over the header and info row.
pub fn draw_dial<D>(
    display: &mut D,
    progress: f32,
    background: Rgb565,
) -> DialStats
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut clipped = display.clipped(&DIAL_AREA);
    fill_rect(&mut clipped, DIAL_AREA, background);

    let ticks_drawn = draw_ticks(&mut clipped, DIAL_CENTER, progress);
    let (glow_passes, gradient_segments) = draw_arc(&mut clipped, DIAL_CENTER, progress, background);

    DialStats {
        ticks_drawn,
        glow_passes,
        gradient_segments,
    }
}

/// Draw the ticks the arc has not reached. Returns how many were drawn.
pub fn draw_ticks<D>(
    display: &mut D,
    center: Point,
    progress: f32,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(TICK, TICK_WIDTH);
    let mut drawn = 0;
    for tick in visible_ticks(progress, center, TICK_COUNT, DIAL_SPAN_DEG) {
        Line::new(tick.outer, tick.inner).into_styled(style).draw(display).ok();
        drawn += 1;
    }
    drawn
}

/// Draw glow, under-stroke and gradient for `progress`.
///
/// Returns `(glow passes drawn, gradient segments drawn)`; both are zero when the
/// sweep is empty.
pub fn draw_arc<D>(
    display: &mut D,
    center: Point,
    progress: f32,
    background: Rgb565,
) -> (u32, u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let start = start_angle_deg(DIAL_SPAN_DEG);
    let sweep = sweep_angle_deg(progress, DIAL_SPAN_DEG);
    if sweep <= 0.0 {
        return (0, 0);
    }

    let glow_passes = draw_glow(display, center, start, sweep, background);

    draw_round_arc(display, center, ARC_DIAMETER, start, sweep, ARC_UNDER_STROKE, GREEN_500);

    let gradient_segments = draw_gradient(display, center, start, sweep);

    (glow_passes, gradient_segments)
}

fn draw_glow<D>(
    display: &mut D,
    center: Point,
    start: f32,
    sweep: f32,
    background: Rgb565,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut coverage = 0.0f32;
    let mut drawn = 0;
    for pass in 0..GLOW_PASSES {
        let (width, alpha) = glow_pass(pass);
        coverage += alpha * (1.0 - coverage);
        let color = blend(background, GREEN_200, coverage);
        if color == background {
            continue;
        }
        draw_round_arc(display, center, ARC_DIAMETER, start, sweep, width, color);
        drawn += 1;
    }
    drawn
}

fn draw_gradient<D>(
    display: &mut D,
    center: Point,
    start: f32,
    sweep: f32,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let end = start + sweep;
    let mut segments = 0;

    let mut from = start;
    while from < end {
        let to = (from + GRADIENT_SEGMENT_DEG).min(end);
        let color = gradient_color((from + to) / 2.0, DIAL_SPAN_DEG);
        let segment_sweep = if to < end {
            to - from + SEGMENT_OVERLAP_DEG
        } else {
            to - from
        };

        Arc::with_center(center, ARC_DIAMETER, from.deg(), segment_sweep.deg())
            .into_styled(PrimitiveStyle::with_stroke(color, ARC_STROKE))
            .draw(display)
            .ok();

        segments += 1;
        from = to;
    }

    draw_cap(display, center, ARC_DIAMETER, start, ARC_STROKE, GRADIENT_START);
    draw_cap(
        display,
        center,
        ARC_DIAMETER,
        end,
        ARC_STROKE,
        gradient_color(end, DIAL_SPAN_DEG),
    );

    segments
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, SCREEN_BG};
    use crate::test_display::TestDisplay;

    #[test]
    fn test_start_angle() {
        assert_eq!(start_angle_deg(240.0), 150.0);
        assert_eq!(start_angle_deg(180.0), 180.0);
    }

    #[test]
    fn test_sweep_is_span_times_progress() {
        for i in 0..=100 {
            let p = i as f32 / 100.0;
            assert_eq!(sweep_angle_deg(p, DIAL_SPAN_DEG), DIAL_SPAN_DEG * p);
        }
    }

    #[test]
    fn test_tick_skip_count() {
        assert_eq!(tick_skip_count(0.0, 40), 0, "Nothing skipped at rest");
        assert_eq!(tick_skip_count(0.01, 40), 1, "Tick 0 hides as soon as the arc starts");
        assert_eq!(tick_skip_count(0.5, 40), 21);
        assert_eq!(tick_skip_count(0.83, 40), 34);
        assert_eq!(tick_skip_count(1.0, 40), 41, "Every tick hidden at full scale");
    }

    #[test]
    fn test_tick_skip_matches_floor_formula() {
        for i in 1..=1000 {
            let p = i as f32 / 1000.0;
            let expected = (p * 40.0).floor() as u32 + 1;
            assert_eq!(tick_skip_count(p, 40), expected, "Mismatch at p = {p}");
        }
    }

    #[test]
    fn test_tick_angles_span_the_dial() {
        assert_eq!(tick_angle_deg(0, 40, 240.0), 150.0);
        assert_eq!(tick_angle_deg(40, 40, 240.0), 390.0);
        assert_eq!(tick_angle_deg(20, 40, 240.0), 270.0, "Middle tick at 12 o'clock");
    }

    #[test]
    fn test_major_ticks() {
        let majors: Vec<u32> = (0..=40).filter(|&i| is_major_tick(i)).collect();
        assert_eq!(majors, vec![0, 5, 10, 15, 20, 25, 30, 35, 40]);
    }

    #[test]
    fn test_visible_ticks() {
        let center = Point::new(100, 100);
        assert_eq!(visible_ticks(0.0, center, 40, 240.0).count(), 41);
        assert_eq!(visible_ticks(0.5, center, 40, 240.0).count(), 20);
        assert_eq!(visible_ticks(1.0, center, 40, 240.0).count(), 0);

        let top = visible_ticks(0.0, center, 40, 240.0)
            .find(|t| t.index == 20)
            .unwrap();
        assert!(top.major);
        assert_eq!(top.outer, Point::new(100, 100 - CANVAS_RADIUS));
        assert_eq!(top.inner, Point::new(100, 100 - CANVAS_RADIUS + TICK_LONG));
    }

    #[test]
    fn test_glow_passes() {
        assert_eq!(glow_pass(0), (ARC_STROKE + 20 * GLOW_WIDTH_STEP, 0.0));
        assert_eq!(glow_pass(20), (ARC_STROKE, 20.0 / 900.0));
        for pass in 1..GLOW_PASSES {
            let (w_prev, a_prev) = glow_pass(pass - 1);
            let (w, a) = glow_pass(pass);
            assert!(w < w_prev, "Widths shrink");
            assert!(a > a_prev, "Opacity grows");
        }
    }

    #[test]
    fn test_gradient_fixed_to_span() {
        assert_eq!(gradient_color(150.0, 240.0), GRADIENT_START);
        assert_eq!(gradient_color(390.0, 240.0), GRADIENT_END);
    }

    #[test]
    fn test_rest_draws_all_ticks_and_no_arc() {
        let mut display = TestDisplay::screen();
        let stats = draw_dial(&mut display, 0.0, SCREEN_BG);
        assert_eq!(stats.ticks_drawn, 41);
        assert_eq!(stats.glow_passes, 0);
        assert_eq!(stats.gradient_segments, 0);
        assert!(display.count(TICK) > 0);
        assert_eq!(display.count(GREEN_500), 0, "No under-stroke at rest");
        assert_eq!(display.count(GRADIENT_START), 0, "No gradient at rest");
    }

    #[test]
    fn test_ticks_disappear_as_arc_grows() {
        let mut rest = TestDisplay::screen();
        draw_dial(&mut rest, 0.0, SCREEN_BG);
        let mut half = TestDisplay::screen();
        let stats = draw_dial(&mut half, 0.5, SCREEN_BG);
        let mut full = TestDisplay::screen();
        draw_dial(&mut full, 1.0, SCREEN_BG);

        assert_eq!(stats.ticks_drawn, 20);
        assert!(half.count(TICK) < rest.count(TICK));
        assert_eq!(full.count(TICK), 0);
    }

    #[test]
    fn test_arc_passes_drawn() {
        let mut display = TestDisplay::screen();
        let stats = draw_dial(&mut display, 0.5, SCREEN_BG);
        assert!(stats.glow_passes > 0 && stats.glow_passes <= GLOW_PASSES);
        assert_eq!(stats.gradient_segments, 20, "120° of sweep in 6° segments");
        assert!(display.count(GREEN_500) > 0, "Under-stroke rims the gradient");
    }

    #[test]
    fn test_dial_clipped_to_area() {
        let mut display = TestDisplay::screen();
        draw_dial(&mut display, 1.0, SCREEN_BG);
        let outside = display.count_outside(&DIAL_AREA, |c| c != BLACK);
        assert_eq!(outside, 0, "Glow must not leak outside the dial area");
        let inside = display.count_in(&DIAL_AREA, |c| c != SCREEN_BG);
        assert!(inside > 0);
    }
}
