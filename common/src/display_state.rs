//! Mapping from dial progress to the text the screen shows.
//!
//! | Readout   | Rule                                                  | Example  |
//! |-----------|-------------------------------------------------------|----------|
//! | speed     | `progress * 100`, one decimal, ties up                | `83.0`   |
//! | ping      | `round(progress * 15)` + `" ms"` if `progress > 0.2`  | `12 ms`  |
//! | max speed | running max, one decimal + `" mbps"` if `max > 0`     | `89.0 mbps` |
//!
//! Both thresholds are strict, so `progress == 0.2` and `max == 0.0` show the
//! placeholder `"-"`.
//!
//! Strings are fixed-capacity `heapless` buffers sized for the `[0, 1]` progress
//! range; values beyond `999.9` would be cut short.

use core::fmt::Write;

use heapless::String;

// =============================================================================
// Mapping Constants
// =============================================================================

/// Placeholder for readouts that have no meaningful value yet.
pub const PLACEHOLDER: &str = "-";

/// Progress must exceed this before a ping is shown.
pub const PING_THRESHOLD: f32 = 0.2;

/// Ping in milliseconds at full progress.
pub const PING_SCALE: f32 = 15.0;

/// Download speed in mbps at full progress.
pub const SPEED_SCALE: f32 = 100.0;

/// Capacity of the speed readout ("100.0").
pub const SPEED_LEN: usize = 8;

/// Capacity of the ping readout ("15 ms").
pub const PING_LEN: usize = 8;

/// Capacity of the max speed readout ("100.0 mbps").
pub const MAX_SPEED_LEN: usize = 16;

// =============================================================================
// Formatting
// =============================================================================

/// Download speed for a progress value, one decimal place.
pub fn format_speed(progress: f32) -> String<SPEED_LEN> {
    let mut s = String::new();
    write_tenths(&mut s, progress * SPEED_SCALE);
    s
}

/// Ping for a progress value, or the placeholder at or below the threshold.
pub fn format_ping(progress: f32) -> String<PING_LEN> {
    let mut s = String::new();
    if progress > PING_THRESHOLD {
        let _ = write!(s, "{} ms", round_half_up(progress * PING_SCALE));
    } else {
        s.push_str(PLACEHOLDER).ok();
    }
    s
}

/// Highest speed seen during the run, or the placeholder before any movement.
pub fn format_max_speed(running_max: f32) -> String<MAX_SPEED_LEN> {
    let mut s = String::new();
    if running_max > 0.0 {
        write_tenths(&mut s, running_max);
        s.push_str(" mbps").ok();
    } else {
        s.push_str(PLACEHOLDER).ok();
    }
    s
}

/// Write `value` with one decimal place, rounding ties up.
///
/// `{:.1}` rounds exact binary ties such as `83.25` to even, so the tenths are
/// rounded here first. Only called with non-negative input.
fn write_tenths<const N: usize>(
    s: &mut String<N>,
    value: f32,
) {
    let tenths = round_half_up(value * 10.0);
    let _ = write!(s, "{}.{}", tenths / 10, tenths % 10);
}

/// Round to the nearest integer, halves away from zero. Only called with positive input.
#[inline]
fn round_half_up(value: f32) -> i32 { (value + 0.5) as i32 }

fn text<const N: usize>(value: &str) -> String<N> {
    let mut s = String::new();
    s.push_str(value).ok();
    s
}

// =============================================================================
// Display State
// =============================================================================

/// Read-only snapshot of everything the screen renders for one frame.
///
/// Derived from `(progress, running_max, running)` every frame and never mutated
/// on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// Dial progress (arc sweep and tick skipping).
    pub progress: f32,
    /// Download speed readout.
    pub speed: String<SPEED_LEN>,
    /// Ping readout.
    pub ping: String<PING_LEN>,
    /// Max speed readout.
    pub max_speed: String<MAX_SPEED_LEN>,
    /// Whether a run is in progress (disables START).
    pub running: bool,
}

impl DisplayState {
    /// Derive the snapshot for a progress value and running max.
    pub fn new(
        progress: f32,
        running_max: f32,
        running: bool,
    ) -> Self {
        Self {
            progress,
            speed: format_speed(progress),
            ping: format_ping(progress),
            max_speed: format_max_speed(running_max),
            running,
        }
    }

    /// State before the first run.
    pub fn idle() -> Self { Self::new(0.0, 0.0, false) }

    /// Fixed design snapshot with hand-picked readouts, used to review the layout.
    pub fn preview() -> Self {
        Self {
            progress: 0.83,
            speed: text("120.5"),
            ping: text("5 ms"),
            max_speed: text("150.0 mbps"),
            running: false,
        }
    }

    /// START is only clickable while no run is active.
    #[inline]
    pub const fn button_enabled(&self) -> bool { !self.running }
}

impl Default for DisplayState {
    fn default() -> Self { Self::idle() }
}

// =============================================================================
// Tests
// =============================================================================
