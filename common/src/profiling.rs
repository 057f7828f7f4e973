//! Debug logging utilities.
//!
//! A ring buffer of short event messages ("Run started", "Page: Debug", ...) shown
//! on the debug page. The time-dependent `ProfilingMetrics` lives in the simulator
//! crate since it needs `std::time`.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Run started");
//! log.push_with_u32("Run complete #", 3);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 12;

/// Maximum characters per log line. The debug terminal fits 36 columns of 6px text.
pub const LOG_LINE_LENGTH: usize = 36;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped when the
/// buffer is full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate message if too long
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Push `prefix` followed by a decimal number.
    pub fn push_with_u32(
        &mut self,
        prefix: &str,
        val: u32,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        line.push_str(prefix).ok();
        push_u32(&mut line, val);
        self.push(&line);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Get number of log entries.
    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
