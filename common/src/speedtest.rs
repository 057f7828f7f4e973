//! Animation driver and screen controller for a speed-test run.
//!
//! [`SpeedTest`] owns the only mutable state behind the screen: the current
//! progress, the running max and whether a run is active. Everything drawn each
//! frame comes out of [`SpeedTest::display_state`].
//!
//! # Frame Flow
//!
//! ```text
//! press_start(now) ──► start(now): running_max = 0, clock restarts at 0
//!        │
//! every frame: update(now) ──► sample source at (now - started_at)
//!        │                     clamp to [0, 1], fold into running_max
//!        ▼                     finish once the source's duration has elapsed
//! display_state() ──► DisplayState ──► widgets
//! ```
//!
//! # Overlapping Starts
//!
//! The START button is disabled while a run is active, so [`SpeedTest::press_start`]
//! ignores presses during a run. A direct [`SpeedTest::start`] during a run replaces
//! it: the newest start wins and is reported as [`StartOutcome::Restarted`] so the
//! caller can log the overlap.
//!
//! Time is a caller-supplied millisecond counter. Differences use wrapping
//! arithmetic, so a counter that rolls over mid-run keeps working.

use crate::display_state::{DisplayState, SPEED_SCALE};
use crate::timeline::{KeyframeTimeline, ProgressSource, SPEEDTEST_TIMELINE};

/// Result of starting a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// No run was active.
    Started,
    /// A run was active and has been replaced from the beginning.
    Restarted,
    /// START was pressed while disabled; nothing happened.
    Ignored,
}

/// Drives progress from a [`ProgressSource`] and tracks the run's high-water mark.
pub struct SpeedTest<S = KeyframeTimeline<'static>> {
    source: S,

    /// Timestamp of the current run's start.
    started_at: Option<u32>,

    /// Latest sampled progress, clamped to `[0, 1]`.
    progress: f32,

    /// Highest `progress * 100` seen since the run started.
    running_max: f32,

    /// Whether the current run is still animating.
    running: bool,

    /// Number of runs started, restarts included.
    runs: u32,
}

impl SpeedTest<KeyframeTimeline<'static>> {
    /// Controller driven by the scripted speed-test curve.
    pub const fn scripted() -> Self { Self::new(SPEEDTEST_TIMELINE) }
}

impl Default for SpeedTest<KeyframeTimeline<'static>> {
    fn default() -> Self { Self::scripted() }
}

impl<S: ProgressSource> SpeedTest<S> {
    /// Idle controller: progress 0, no run, no running max.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            started_at: None,
            progress: 0.0,
            running_max: 0.0,
            running: false,
            runs: 0,
        }
    }

    /// Start a run at `now_ms`, replacing any active run.
    pub fn start(
        &mut self,
        now_ms: u32,
    ) -> StartOutcome {
        let outcome = if self.running {
            StartOutcome::Restarted
        } else {
            StartOutcome::Started
        };

        self.started_at = Some(now_ms);
        self.running_max = 0.0;
        self.running = true;
        self.runs = self.runs.wrapping_add(1);
        self.progress = clamp_progress(self.source.sample(0));

        outcome
    }

    /// START button handler. Presses while the button is disabled are ignored.
    pub fn press_start(
        &mut self,
        now_ms: u32,
    ) -> StartOutcome {
        if self.running {
            StartOutcome::Ignored
        } else {
            self.start(now_ms)
        }
    }

    /// Advance to `now_ms` and return the new progress.
    ///
    /// Returns the resting progress unchanged when no run is active.
    pub fn update(
        &mut self,
        now_ms: u32,
    ) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.progress;
        };
        if !self.running {
            return self.progress;
        }

        let elapsed = now_ms.wrapping_sub(started_at);
        self.progress = clamp_progress(self.source.sample(elapsed));
        self.running_max = self.running_max.max(self.progress * SPEED_SCALE);

        if elapsed >= self.source.duration_ms() {
            self.running = false;
        }

        self.progress
    }

    /// Snapshot for the renderer.
    pub fn display_state(&self) -> DisplayState { DisplayState::new(self.progress, self.running_max, self.running) }

    /// Current progress.
    #[inline]
    pub const fn progress(&self) -> f32 { self.progress }

    /// Highest speed seen in the current run.
    #[inline]
    pub const fn running_max(&self) -> f32 { self.running_max }

    /// Whether a run is animating.
    #[inline]
    pub const fn is_running(&self) -> bool { self.running }

    /// Runs started so far.
    #[inline]
    pub const fn runs(&self) -> u32 { self.runs }

    /// Milliseconds into the current run, if one was ever started.
    pub fn elapsed_ms(
        &self,
        now_ms: u32,
    ) -> Option<u32> {
        self.started_at.map(|start| now_ms.wrapping_sub(start))
    }
}

/// Keep overshooting easing inside the dial's span.
#[inline]
fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::timeline::{Keyframe, SPEEDTEST_DURATION_MS, SPEEDTEST_TARGET};

    /// Rises to 0.9 then falls to 0.5, linearly, over one second.
    const PEAK_FRAMES: [Keyframe; 2] = [
        Keyframe::new(0, 0.0, Easing::Linear),
        Keyframe::new(500, 0.9, Easing::Linear),
    ];
    const PEAK: KeyframeTimeline<'static> = KeyframeTimeline::new(&PEAK_FRAMES, 1000, 0.5);

    struct Overshoot;

    impl ProgressSource for Overshoot {
        fn duration_ms(&self) -> u32 { 100 }

        fn sample(
            &self,
            elapsed_ms: u32,
        ) -> f32 {
            if elapsed_ms < 50 { -0.5 } else { 1.7 }
        }
    }

    #[test]
    fn test_new_is_idle() {
        let test = SpeedTest::scripted();
        assert!(!test.is_running());
        assert_eq!(test.progress(), 0.0);
        assert_eq!(test.running_max(), 0.0);
        assert_eq!(test.runs(), 0);
        assert_eq!(test.display_state(), DisplayState::idle());
    }

    #[test]
    fn test_update_before_start_is_noop() {
        let mut test = SpeedTest::scripted();
        assert_eq!(test.update(5000), 0.0);
        assert!(!test.is_running());
    }

    #[test]
    fn test_full_scripted_run() {
        let mut test = SpeedTest::scripted();
        assert_eq!(test.start(1_000), StartOutcome::Started);
        assert!(test.is_running());

        let mut now = 1_000;
        while now <= 1_000 + SPEEDTEST_DURATION_MS {
            test.update(now);
            now += 20;
        }
        test.update(1_000 + SPEEDTEST_DURATION_MS);

        assert!(!test.is_running(), "Run ends after the timeline duration");
        assert_eq!(test.progress(), SPEEDTEST_TARGET);
        assert!(test.running_max() >= 89.0 - 0.01, "Max should include the 0.89 peak");
        assert!(test.display_state().button_enabled());
    }

    #[test]
    fn test_running_max_non_decreasing() {
        let mut test = SpeedTest::new(PEAK);
        test.start(0);

        let mut prev_max = test.running_max();
        for now in (0..=1000).step_by(10) {
            test.update(now);
            assert!(test.running_max() >= prev_max, "Max dropped at {now}ms");
            assert!(test.running_max() >= test.progress() * 100.0 - 1e-4);
            prev_max = test.running_max();
        }

        assert_eq!(test.progress(), 0.5);
        assert!((test.running_max() - 90.0).abs() < 1e-3, "Peak of 0.9 is held");
        assert_eq!(test.display_state().max_speed.as_str(), "90.0 mbps");
    }

    #[test]
    fn test_restart_resets_max() {
        let mut test = SpeedTest::new(PEAK);
        test.start(0);
        test.update(500);
        assert!(test.running_max() > 0.0);

        assert_eq!(test.start(600), StartOutcome::Restarted, "Last start wins");
        assert_eq!(test.running_max(), 0.0);
        assert_eq!(test.progress(), 0.0);
        assert_eq!(test.display_state().max_speed.as_str(), "-", "Max readout resets");
        assert_eq!(test.runs(), 2);

        // Elapsed is measured from the newest start
        test.update(850);
        assert!((test.progress() - 0.45).abs() < 1e-4);
    }

    #[test]
    fn test_press_start_ignored_while_running() {
        let mut test = SpeedTest::new(PEAK);
        assert_eq!(test.press_start(0), StartOutcome::Started);
        test.update(300);
        let max_before = test.running_max();

        assert_eq!(test.press_start(400), StartOutcome::Ignored);
        assert_eq!(test.runs(), 1);
        assert_eq!(test.running_max(), max_before, "Ignored press keeps the run intact");

        test.update(1000);
        assert_eq!(test.press_start(1100), StartOutcome::Started, "Enabled again after the run");
    }

    #[test]
    fn test_progress_clamped() {
        let mut test = SpeedTest::new(Overshoot);
        test.start(0);
        assert_eq!(test.progress(), 0.0, "Negative samples clamp to 0");
        test.update(60);
        assert_eq!(test.progress(), 1.0, "Samples above 1 clamp to 1");
        assert_eq!(test.running_max(), 100.0);
    }

    #[test]
    fn test_clock_wraparound() {
        let mut test = SpeedTest::new(PEAK);
        let start = u32::MAX - 100;
        test.start(start);
        test.update(start.wrapping_add(250));
        assert!((test.progress() - 0.45).abs() < 1e-4, "Elapsed survives u32 rollover");
        assert_eq!(test.elapsed_ms(start.wrapping_add(250)), Some(250));
    }

    #[test]
    fn test_update_after_finish_keeps_resting_value() {
        let mut test = SpeedTest::new(PEAK);
        test.start(0);
        test.update(1000);
        assert!(!test.is_running());
        assert_eq!(test.update(50_000), 0.5);
    }

    #[test]
    fn test_display_state_tracks_progress() {
        let mut test = SpeedTest::new(PEAK);
        test.start(0);
        test.update(250);
        let state = test.display_state();
        assert!(state.running);
        assert_eq!(state.speed.as_str(), "45.0");
        assert_eq!(state.ping.as_str(), "7 ms");
    }
}
