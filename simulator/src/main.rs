//! Speed-test dial simulator for Windows/Desktop.
//!
//! This is the simulator binary that runs on desktop platforms using
//! the embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | `Space` / `S` / click START | Start a run (ignored while running) |
//! | `R` | Force a restart, even mid-run |
//! | `P` | Toggle the design preview snapshot |
//! | `Y` | Toggle the debug page |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod profiling;
mod screens;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use speedtest_common::colors::BLACK;
use speedtest_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use speedtest_common::profiling::DebugLog;
use speedtest_common::{
    DisplayState,
    Page,
    RenderState,
    SpeedTest,
    StartOutcome,
    draw_speedtest_screen,
    start_button_hit,
};

use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::{FPS_WINDOW, FRAME_TIME};

/// Where a start request came from.
#[derive(Clone, Copy)]
enum StartRequest {
    /// START button (keyboard or mouse). Ignored while running.
    Press,
    /// Forced restart. Replaces a run in flight.
    Force,
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Speedtest Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let clock = Instant::now();

    // Controller state
    let mut speedtest = SpeedTest::scripted();
    let mut show_preview = false;

    // FPS tracking
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Render state
    let mut render_state = RenderState::new();
    let mut current_page = Page::default();
    let mut page_just_switched = false;

    // Profiling
    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u32;

        // Handle events
        let mut start_request = None;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Space | Keycode::S if current_page == Page::SpeedTest => {
                            start_request = Some(StartRequest::Press);
                        }
                        Keycode::R if current_page == Page::SpeedTest => {
                            start_request = Some(StartRequest::Force);
                        }
                        Keycode::P if current_page == Page::SpeedTest => {
                            show_preview = !show_preview;
                            debug_log.push(if show_preview { "Preview: ON" } else { "Preview: OFF" });
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            debug_log.push(current_page.log_label());
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } if current_page == Page::SpeedTest && start_button_hit(point) => {
                    start_request = Some(StartRequest::Press);
                }
                _ => {}
            }
        }

        // Apply start request
        if let Some(request) = start_request {
            let outcome = match request {
                StartRequest::Press => speedtest.press_start(now_ms),
                StartRequest::Force => speedtest.start(now_ms),
            };
            match outcome {
                StartOutcome::Started => {
                    metrics.runs_started += 1;
                    debug_log.push_with_u32("Run started #", speedtest.runs());
                }
                StartOutcome::Restarted => {
                    metrics.runs_started += 1;
                    metrics.restarts += 1;
                    debug_log.push_with_u32("Run restarted (overlap) #", speedtest.runs());
                }
                StartOutcome::Ignored => {
                    metrics.ignored_presses += 1;
                    debug_log.push("START ignored (running)");
                }
            }
        }

        // Advance the animation
        let was_running = speedtest.is_running();
        let prev_max = speedtest.running_max();
        speedtest.update(now_ms);
        if speedtest.running_max() > prev_max {
            metrics.peak_updates += 1;
        }
        if was_running && !speedtest.is_running() {
            debug_log.push_with_u32("Run complete #", speedtest.runs());
        }

        // Clear display when needed
        if render_state.is_first_frame() || page_just_switched {
            display.clear(BLACK).ok();
            if page_just_switched {
                render_state.mark_display_cleared();
            }
        }

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed() >= FPS_WINDOW {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // Render based on current page
        match current_page {
            Page::SpeedTest => {
                let state = if show_preview {
                    DisplayState::preview()
                } else {
                    speedtest.display_state()
                };
                let stats = draw_speedtest_screen(&mut display, &state, &mut render_state);
                metrics.record_screen(stats);
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &debug_log, &speedtest, current_fps);
            }
        }

        let render_time = frame_start.elapsed();
        render_state.end_frame();
        page_just_switched = false;

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
