//! Debug/profiling page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use speedtest_common::SpeedTest;
use speedtest_common::colors::{BLACK, DIVIDER, GRAY, GREEN_200, GREEN_500, PINK_80, SCREEN_BG, WHITE};
use speedtest_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use speedtest_common::profiling::DebugLog;
use speedtest_common::styles::LABEL_FONT;

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;
const SECTION_HEADER_Y: i32 = 28;
const STATS_Y: i32 = 40;
const LOG_DIVIDER_Y: i32 = 130;
const LOG_Y: i32 = 138;
const LOG_LINE_HEIGHT: i32 = 12;
const COL1_X: i32 = 4;
const COL2_X: i32 = 84;
const COL3_X: i32 = 164;
const STAT_LINE_HEIGHT: i32 = 13;

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN_500;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = PINK_80;
const LOG_PROMPT_COLOR: Rgb565 = GREEN_500;
const LOG_TEXT_COLOR: Rgb565 = GREEN_200;
const LOG_BG: Rgb565 = SCREEN_BG;

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    speedtest: &SpeedTest,
    fps: f32,
) {
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_render_column(display, metrics);
    draw_run_column(display, metrics, speedtest);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    fps: f32,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(84, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(190, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    Text::new("TIMING", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("RENDER", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("RUN", Point::new(COL3_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

/// Draw `lines` top to bottom starting at `(x, STATS_Y)`.
fn draw_stat_lines(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    lines: &[(String<16>, Rgb565)],
) {
    let mut y = STATS_Y;
    for (text, color) in lines {
        Text::new(text, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, *color))
            .draw(display)
            .ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn stat(args: core::fmt::Arguments<'_>) -> String<16> {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    s
}

fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let min_ms = if metrics.frame_time_min_us == u32::MAX {
        0.0
    } else {
        metrics.frame_time_min_us as f32 / 1000.0
    };

    let lines = [
        (stat(format_args!("Frm: {:.1}ms", metrics.frame_time_us as f32 / 1000.0)), VALUE_COLOR),
        (stat(format_args!("Rnd: {:.1}ms", metrics.render_time_us as f32 / 1000.0)), VALUE_COLOR),
        (stat(format_args!("Slp: {:.1}ms", metrics.sleep_time_us as f32 / 1000.0)), VALUE_COLOR),
        (stat(format_args!("Min: {min_ms:.1}ms")), HIGHLIGHT_COLOR),
        (stat(format_args!("Max: {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0)), HIGHLIGHT_COLOR),
        (stat(format_args!("Avg: {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0)), HIGHLIGHT_COLOR),
    ];
    draw_stat_lines(display, COL1_X, &lines);
}

fn draw_render_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let dial = metrics.last_dial;
    let lines = [
        (stat(format_args!("Frames:{}", metrics.total_frames)), VALUE_COLOR),
        (stat(format_args!("Chrome:{}", metrics.chrome_redraws)), VALUE_COLOR),
        (stat(format_args!("Dials: {}", metrics.dial_redraws)), VALUE_COLOR),
        (stat(format_args!("Ticks: {}", dial.ticks_drawn)), VALUE_COLOR),
        (stat(format_args!("Glow:  {}", dial.glow_passes)), VALUE_COLOR),
        (stat(format_args!("Segs:  {}", dial.gradient_segments)), VALUE_COLOR),
    ];
    draw_stat_lines(display, COL2_X, &lines);
}

fn draw_run_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    speedtest: &SpeedTest,
) {
    let state = if speedtest.is_running() { "RUN" } else { "IDLE" };
    let lines = [
        (stat(format_args!("State: {state}")), HIGHLIGHT_COLOR),
        (stat(format_args!("Prog: {:.3}", speedtest.progress())), VALUE_COLOR),
        (stat(format_args!("Max:  {:.1}", speedtest.running_max())), VALUE_COLOR),
        (stat(format_args!("Runs: {}", metrics.runs_started)), VALUE_COLOR),
        (stat(format_args!("Rstr: {}", metrics.restarts)), VALUE_COLOR),
        (stat(format_args!("Ignr: {}", metrics.ignored_presses)), VALUE_COLOR),
        (stat(format_args!("Peak: {}", metrics.peak_updates)), VALUE_COLOR),
    ];
    draw_stat_lines(display, COL3_X, &lines);
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &DebugLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER, 1))
        .draw(display)
        .ok();
}
