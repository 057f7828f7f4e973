//! Platform-independent core of the speed-test dial screen.
//!
//! Everything here is shared between the desktop simulator and any display that
//! implements `DrawTarget<Color = Rgb565>`:
//!
//! - [`colors`]: RGB565 palette (the screen's design tokens)
//! - [`config`]: Screen layout and dial geometry constants
//! - [`styles`]: Pre-computed text styles
//! - [`easing`]: Cubic-bezier easing curves
//! - [`timeline`]: Keyframe timeline and the scripted speed-test curve
//! - [`speedtest`]: Animation driver that owns progress and the running max
//! - [`display_state`]: Progress-to-text mapping for the readouts
//! - [`dial`]: Tick and glow-arc geometry and drawing
//! - [`widgets`]: Header, readout, start button, info row, navigation bar
//! - [`render`]: Redraw tracking for static screen chrome
//! - [`pages`]: Page navigation enum
//! - [`profiling`]: Debug log buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Time is passed in by the caller as a
//! millisecond timestamp, so nothing here depends on `std::time`. Tests run with
//! `std` enabled for the test harness.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod dial;
pub mod display_state;
pub mod easing;
pub mod pages;
pub mod profiling;
pub mod render;
pub mod speedtest;
pub mod styles;
pub mod timeline;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_display;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use display_state::DisplayState;
pub use pages::Page;
pub use render::RenderState;
pub use speedtest::{SpeedTest, StartOutcome};
pub use timeline::{KeyframeTimeline, ProgressSource, SPEEDTEST_TIMELINE};
pub use widgets::{draw_speedtest_screen, start_button_hit};
