//! Render state tracking for optimized display updates.
//!
//! This module tracks display state for:
//! - Static chrome draw-once optimization (header, info row titles, nav bar)
//! - Dynamic region redraw only when the [`DisplayState`] changes
//! - Page switch cleanup (redraw everything after the Debug page cleared the screen)
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Header, info titles, divider, nav bar | Once / after page switch | Draw-once tracking |
//! | Dial, readout, START button | When the state changes | Full dial-area repaint |
//! | PING / MAX SPEED values | When the state changes | Clear value boxes, redraw |
//!
//! The dial is repainted as a whole because the glow composite depends on the
//! background under every pass; there is no cheap partial update for a shrinking arc.
//! An idle screen therefore costs nothing per frame.

use crate::display_state::DisplayState;

/// Tracks render state for optimized display updates.
pub struct RenderState {
    /// Whether the static chrome has been drawn.
    chrome_drawn: bool,

    /// Last state drawn into the dynamic regions.
    prev_state: Option<DisplayState>,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g., page switch).
    /// When true, chrome and dynamic regions need redrawing.
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            chrome_drawn: false,
            prev_state: None,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the static chrome needs drawing.
    #[inline]
    pub const fn need_chrome(&self) -> bool { !self.chrome_drawn || self.first_frame || self.display_cleared }

    /// Mark the static chrome as drawn.
    #[inline]
    pub const fn mark_chrome_drawn(&mut self) { self.chrome_drawn = true; }

    /// Check if the dynamic regions need redrawing for `state`, and remember it.
    pub fn check_state_dirty(
        &mut self,
        state: &DisplayState,
    ) -> bool {
        let dirty = self.first_frame || self.display_cleared || self.prev_state.as_ref() != Some(state);
        if dirty {
            self.prev_state = Some(state.clone());
        }
        dirty
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Mark that the display was cleared externally.
    ///
    /// Call this when `display.clear()` is called due to page switching.
    pub fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.chrome_drawn = false;
        self.prev_state = None;
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
