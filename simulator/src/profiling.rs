//! Profiling metrics with time-based measurements.
//!
//! Provides frame timing statistics plus render and run counters.
//! The `DebugLog` type is in the common crate since it doesn't need time.

use std::time::{Duration, Instant};

use heapless::String;
use speedtest_common::dial::DialStats;
use speedtest_common::profiling::push_u32;
use speedtest_common::widgets::ScreenStats;

/// Frame timing, render and run statistics for profiling.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Render counters
    pub total_frames: u64,
    pub chrome_redraws: u32,
    pub dial_redraws: u32,
    pub last_dial: DialStats,

    // Run counters
    pub runs_started: u32,
    pub restarts: u32,
    pub ignored_presses: u32,
    pub peak_updates: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    /// Create new profiling metrics.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            chrome_redraws: 0,
            dial_redraws: 0,
            last_dial: DialStats::default(),
            runs_started: 0,
            restarts: 0,
            ignored_presses: 0,
            peak_updates: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;
        let render_us = render_time.as_micros() as u32;
        let sleep_us = sleep_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_us;
        self.sleep_time_us = sleep_us;

        if total_us < self.frame_time_min_us {
            self.frame_time_min_us = total_us;
        }
        if total_us > self.frame_time_max_us {
            self.frame_time_max_us = total_us;
        }

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Fold the speed-test screen's redraw report into the counters.
    pub fn record_screen(
        &mut self,
        stats: ScreenStats,
    ) {
        if stats.chrome {
            self.chrome_redraws += 1;
        }
        if let Some(dial) = stats.dial {
            self.dial_redraws += 1;
            self.last_dial = dial;
        }
    }

    /// Get average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Get uptime since metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format seconds as HH:MM:SS.
fn format_hms(secs: u64) -> String<12> {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part as u32);
    }
    s
}
