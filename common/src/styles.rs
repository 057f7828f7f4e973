//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in embedded-graphics 0.8,
//! so every style the screen uses lives here as a compile-time constant and widget
//! code only references it.
//!
//! For colors decided at runtime (the dimmed START label), use [`LABEL_FONT`] /
//! [`BUTTON_FONT`] with `MonoTextStyle::new(font, color)`.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13, FONT_7X13_BOLD, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered horizontally and vertically on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small caption font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// START button font.
pub const BUTTON_FONT: &MonoFont = &FONT_7X13_BOLD;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Screen title ("SPEEDTEST").
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Gray captions: "DOWNLOAD", "mbps", info column titles.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Large download speed value (`ProFont` 24pt).
pub const SPEED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Info column values (ping, max speed).
pub const INFO_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, WHITE);
