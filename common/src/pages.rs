//! Page navigation for the simulator.
//!
//! Press `Y` to toggle between pages.
//!
//! # Pages
//!
//! - [`Page::SpeedTest`]: Dial, readout, START button, info row and navigation bar
//! - [`Page::Debug`]: Profiling metrics, frame timing, and debug log terminal

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The speed-test screen.
    #[default]
    SpeedTest,

    /// Debug/profiling page with frame timing and the event log.
    Debug,
}

impl Page {
    /// Toggle to the next page (cycles between SpeedTest and Debug).
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::SpeedTest => Self::Debug,
            Self::Debug => Self::SpeedTest,
        }
    }

    /// Log line for switching to this page.
    #[inline]
    pub const fn log_label(self) -> &'static str {
        match self {
            Self::SpeedTest => "Page: Speedtest",
            Self::Debug => "Page: Debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::SpeedTest);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::SpeedTest.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::SpeedTest);
    }

    #[test]
    fn test_page_toggle_cycle() {
        let page = Page::SpeedTest.toggle().toggle();
        assert_eq!(page, Page::SpeedTest);
    }

    #[test]
    fn test_log_labels_differ() {
        assert_ne!(Page::SpeedTest.log_label(), Page::Debug.log_label());
    }
}
