//! Screen layout and dial geometry constants.
//!
//! # Pre-computed Layout Constants
//!
//! Every position the screen needs is derived here at compile time, so widget
//! functions only add offsets to constants and never divide per frame.
//!
//! ```text
//! ┌──────────────────────────┐
//! │        SPEEDTEST         │  32px  header
//! ├──────────────────────────┤
//! │      ╭─ ─ ─ ─ ─ ─╮       │
//! │    ╱   DOWNLOAD    ╲     │
//! │   │      83.0       │    │ 208px  dial square
//! │    ╲     mbps      ╱     │
//! │        [ START ]         │
//! ├────────────┬─────────────┤
//! │    PING    │  MAX SPEED  │  40px  info row
//! │   12 ms    │ 84.1 mbps   │
//! ├──────┬─────┴┬──────┬─────┤
//! │ wifi │person│speed │ gear│  40px  navigation bar
//! └──────┴──────┴──────┴─────┘
//! ```

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (portrait phone-style layout).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Horizontal center of the screen.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Vertical Bands
// =============================================================================

/// Header band holding the screen title.
pub const HEADER_HEIGHT: u32 = 32;

/// Side of the square dial area.
pub const DIAL_SIZE: u32 = 208;

/// Left edge of the dial square.
pub const DIAL_X: i32 = ((SCREEN_WIDTH - DIAL_SIZE) / 2) as i32;

/// Top edge of the dial square (directly under the header).
pub const DIAL_Y: i32 = HEADER_HEIGHT as i32;

/// Info row (PING / MAX SPEED) top edge.
pub const INFO_Y: i32 = DIAL_Y + DIAL_SIZE as i32;

/// Info row height.
pub const INFO_HEIGHT: u32 = 40;

/// Navigation bar top edge.
pub const NAV_Y: i32 = INFO_Y + INFO_HEIGHT as i32;

/// Navigation bar height.
pub const NAV_HEIGHT: u32 = 40;

const _: () = assert!(NAV_Y as u32 + NAV_HEIGHT == SCREEN_HEIGHT);

/// Area redrawn every frame for the dial. Glow strokes are clipped to it.
pub const DIAL_AREA: Rectangle = Rectangle::new(Point::new(0, DIAL_Y), Size::new(SCREEN_WIDTH, DIAL_SIZE));

/// Center of the dial.
pub const DIAL_CENTER: Point = Point::new(DIAL_X + (DIAL_SIZE / 2) as i32, DIAL_Y + (DIAL_SIZE / 2) as i32);

// =============================================================================
// Dial Geometry
// =============================================================================

/// Angular span covered by ticks and arc, in degrees.
pub const DIAL_SPAN_DEG: f32 = 240.0;

/// Inset of the drawing canvas inside the dial square.
pub const DIAL_PADDING: u32 = 12;

/// Radius of the canvas rim. Tick marks start here and point inward.
pub const CANVAS_RADIUS: i32 = ((DIAL_SIZE - 2 * DIAL_PADDING) / 2) as i32;

/// Inset of the arc's center line from the canvas rim.
pub const ARC_INSET: u32 = 11;

/// Diameter of the arc's center line.
pub const ARC_DIAMETER: u32 = (CANVAS_RADIUS as u32) * 2 - 2 * ARC_INSET;

/// Width of the gradient top stroke.
pub const ARC_STROKE: u32 = 16;

/// Width of the solid under-stroke (slightly wider to rim the gradient).
pub const ARC_UNDER_STROKE: u32 = 18;

const _: () = assert!(ARC_UNDER_STROKE > ARC_STROKE);

/// Number of translucent glow passes around the arc.
pub const GLOW_PASSES: u32 = 21;

/// Extra width added per glow pass, outermost pass first.
pub const GLOW_WIDTH_STEP: u32 = 3;

/// Glow pass `i` is drawn with opacity `i / GLOW_ALPHA_DIVISOR`.
pub const GLOW_ALPHA_DIVISOR: f32 = 900.0;

/// Angular length of one gradient segment, in degrees.
pub const GRADIENT_SEGMENT_DEG: f32 = 6.0;

/// Number of tick intervals across the span (ticks are indexed `0..=TICK_COUNT`).
pub const TICK_COUNT: u32 = 40;

/// Every n-th tick is drawn long.
pub const TICK_MAJOR_EVERY: u32 = 5;

/// Length of a long (major) tick.
pub const TICK_LONG: i32 = 17;

/// Length of a short (minor) tick.
pub const TICK_SHORT: i32 = 7;

/// Stroke width of tick marks.
pub const TICK_WIDTH: u32 = 2;

const _: () = assert!(TICK_LONG > TICK_SHORT);
const _: () = assert!(TICK_LONG < CANVAS_RADIUS);

// =============================================================================
// Widget Positions
// =============================================================================

/// Title baseline-middle position.
pub const TITLE_POS: Point = Point::new(CENTER_X, (HEADER_HEIGHT / 2) as i32 + 2);

/// "DOWNLOAD" caption above the speed value.
pub const READOUT_CAPTION_POS: Point = Point::new(DIAL_CENTER.x, DIAL_CENTER.y - 26);

/// Speed value, centered on the dial.
pub const READOUT_VALUE_POS: Point = Point::new(DIAL_CENTER.x, DIAL_CENTER.y);

/// "mbps" unit under the speed value.
pub const READOUT_UNIT_POS: Point = Point::new(DIAL_CENTER.x, DIAL_CENTER.y + 24);

/// Area cleared before the speed value is redrawn.
pub const READOUT_VALUE_AREA: Rectangle =
    Rectangle::new(Point::new(DIAL_CENTER.x - 50, DIAL_CENTER.y - 16), Size::new(100, 32));

/// START button size.
pub const START_BUTTON_SIZE: Size = Size::new(76, 24);

/// Gap between the START button and the bottom of the dial square.
pub const START_BUTTON_MARGIN: i32 = 10;

/// START button bounds (also used for hit testing).
pub const START_BUTTON_AREA: Rectangle = Rectangle::new(
    Point::new(
        CENTER_X - (START_BUTTON_SIZE.width / 2) as i32,
        INFO_Y - START_BUTTON_MARGIN - START_BUTTON_SIZE.height as i32,
    ),
    START_BUTTON_SIZE,
);

/// Width of one info column.
pub const INFO_COLUMN_WIDTH: u32 = SCREEN_WIDTH / 2;

/// Info column title offset from the top of the info row.
pub const INFO_TITLE_DY: i32 = 11;

/// Info column value offset from the top of the info row.
pub const INFO_VALUE_DY: i32 = 28;

/// Number of navigation items.
pub const NAV_ITEMS: u32 = 4;

/// Width of one navigation item.
pub const NAV_ITEM_WIDTH: u32 = SCREEN_WIDTH / NAV_ITEMS;

/// Index of the highlighted navigation item (the speed icon).
pub const NAV_SELECTED: usize = 2;

/// Bounding box side of a navigation icon.
pub const NAV_ICON_SIZE: u32 = 20;

// =============================================================================
// Tests
// =============================================================================
