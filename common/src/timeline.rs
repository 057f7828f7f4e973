//! Keyframe timeline that scripts the dial's progress over time.
//!
//! A timeline is an ordered list of breakpoints `(time, value, easing)` followed by
//! an implicit final breakpoint at `(duration, target)`. The easing stored on a
//! keyframe shapes the segment that *starts* at that keyframe:
//!
//! ```text
//! value
//!  0.89 ┤                               ╭─╮
//!  0.84 ┤                               │  ╰╮      ╭──── target
//!  0.72 ┤     ╭──╮╭──╮╭──╮╭──╮╭──╮──────╯   ╰──────╯
//!       │    ╱
//!  0.00 ┼───╯
//!       0   1s   2s  3s  4s  5s  6s       7.5s      9s
//! ```
//!
//! The scripted curve is only a stand-in for a measurement. Anything that can say
//! "where is the needle after `n` ms" can drive the screen through
//! [`ProgressSource`]; the renderer never sees the timeline itself.

use crate::easing::{Easing, LINEAR_OUT_SLOW_IN};

// =============================================================================
// Progress Source
// =============================================================================

/// Produces the dial's progress as a function of time since the run started.
pub trait ProgressSource {
    /// Length of a run in milliseconds. Sampling at or after it returns the final value.
    fn duration_ms(&self) -> u32;

    /// Progress after `elapsed_ms` milliseconds. May leave `[0, 1]` while easing overshoots.
    fn sample(
        &self,
        elapsed_ms: u32,
    ) -> f32;
}

// =============================================================================
// Keyframes
// =============================================================================

/// One breakpoint of a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Offset from the start of the run.
    pub at_ms: u32,
    /// Value reached at `at_ms`.
    pub value: f32,
    /// Easing of the segment leaving this keyframe.
    pub easing: Easing,
}

impl Keyframe {
    pub const fn new(
        at_ms: u32,
        value: f32,
        easing: Easing,
    ) -> Self {
        Self { at_ms, value, easing }
    }
}

/// Piecewise eased timeline ending at `(duration_ms, target)`.
#[derive(Clone, Copy, Debug)]
pub struct KeyframeTimeline<'a> {
    keyframes: &'a [Keyframe],
    duration_ms: u32,
    target: f32,
}

impl<'a> KeyframeTimeline<'a> {
    /// Create a timeline. Keyframes must be sorted by time and lie before `duration_ms`.
    pub const fn new(
        keyframes: &'a [Keyframe],
        duration_ms: u32,
        target: f32,
    ) -> Self {
        Self {
            keyframes,
            duration_ms,
            target,
        }
    }

    /// Value the timeline settles on.
    #[inline]
    pub const fn target(&self) -> f32 { self.target }

    /// Breakpoints, excluding the implicit final one.
    #[inline]
    pub const fn keyframes(&self) -> &'a [Keyframe] { self.keyframes }
}

impl ProgressSource for KeyframeTimeline<'_> {
    #[inline]
    fn duration_ms(&self) -> u32 { self.duration_ms }

    fn sample(
        &self,
        elapsed_ms: u32,
    ) -> f32 {
        if elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let Some(first) = self.keyframes.first() else {
            return self.target;
        };
        if elapsed_ms <= first.at_ms {
            return first.value;
        }

        for (i, frame) in self.keyframes.iter().enumerate() {
            let (end_ms, end_value) = match self.keyframes.get(i + 1) {
                Some(next) => (next.at_ms, next.value),
                None => (self.duration_ms, self.target),
            };
            if elapsed_ms >= end_ms {
                continue;
            }

            let segment_ms = end_ms.saturating_sub(frame.at_ms);
            if segment_ms == 0 {
                return end_value;
            }
            let fraction = elapsed_ms.saturating_sub(frame.at_ms) as f32 / segment_ms as f32;
            return frame.value + (end_value - frame.value) * frame.easing.transform(fraction);
        }

        self.target
    }
}

/// `true` when keyframe times strictly increase and all precede `duration_ms`.
pub const fn keyframes_ordered(
    keyframes: &[Keyframe],
    duration_ms: u32,
) -> bool {
    let mut i = 0;
    while i < keyframes.len() {
        if keyframes[i].at_ms >= duration_ms {
            return false;
        }
        if i > 0 && keyframes[i - 1].at_ms >= keyframes[i].at_ms {
            return false;
        }
        i += 1;
    }
    true
}

// =============================================================================
// Scripted Speed-Test Curve
// =============================================================================

/// Total length of a scripted run.
pub const SPEEDTEST_DURATION_MS: u32 = 9000;

/// Value the needle settles on at the end of a run.
pub const SPEEDTEST_TARGET: f32 = 0.84;

/// Fast climb with overshoot, a series of wobbling steps, a peak, then a settle.
pub const SPEEDTEST_KEYFRAMES: [Keyframe; 8] = [
    Keyframe::new(0, 0.0, Easing::cubic(0.0, 1.5, 0.8, 1.0)),
    Keyframe::new(1000, 0.72, Easing::cubic(0.2, -1.5, 0.0, 1.0)),
    Keyframe::new(2000, 0.76, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(3000, 0.78, Easing::cubic(0.2, -1.5, 0.0, 1.0)),
    Keyframe::new(4000, 0.82, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(5000, 0.85, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(6000, 0.89, Easing::cubic(0.2, -1.2, 0.0, 1.0)),
    Keyframe::new(7500, 0.82, LINEAR_OUT_SLOW_IN),
];

const _: () = assert!(keyframes_ordered(&SPEEDTEST_KEYFRAMES, SPEEDTEST_DURATION_MS));

/// The timeline the screen runs when START is pressed.
pub const SPEEDTEST_TIMELINE: KeyframeTimeline<'static> =
    KeyframeTimeline::new(&SPEEDTEST_KEYFRAMES, SPEEDTEST_DURATION_MS, SPEEDTEST_TARGET);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_hit_exactly() {
        for frame in &SPEEDTEST_KEYFRAMES {
            assert_eq!(
                SPEEDTEST_TIMELINE.sample(frame.at_ms),
                frame.value,
                "Breakpoint at {}ms should return its value",
                frame.at_ms
            );
        }
    }

    #[test]
    fn test_end_returns_target() {
        assert_eq!(SPEEDTEST_TIMELINE.sample(SPEEDTEST_DURATION_MS), SPEEDTEST_TARGET);
        assert_eq!(SPEEDTEST_TIMELINE.sample(u32::MAX), SPEEDTEST_TARGET);
        let near_end = SPEEDTEST_TIMELINE.sample(SPEEDTEST_DURATION_MS - 1);
        assert!((near_end - SPEEDTEST_TARGET).abs() < 0.01, "Last segment converges, got {near_end}");
    }

    #[test]
    fn test_duration_and_target() {
        assert_eq!(SPEEDTEST_TIMELINE.duration_ms(), 9000);
        assert_eq!(SPEEDTEST_TIMELINE.target(), 0.84);
        assert_eq!(SPEEDTEST_TIMELINE.keyframes().len(), 8);
    }

    #[test]
    fn test_first_segment_overshoots() {
        let peak = (1..100)
            .map(|ms| SPEEDTEST_TIMELINE.sample(ms * 10))
            .fold(f32::MIN, f32::max);
        assert!(peak > 0.72, "Climb should overshoot the first breakpoint, peak {peak}");
    }

    #[test]
    fn test_wobble_dips_below_previous_breakpoint() {
        let just_after = SPEEDTEST_TIMELINE.sample(1100);
        assert!(just_after < 0.72, "Segment easing should dip first, got {just_after}");
    }

    #[test]
    fn test_settle_segment_monotonic() {
        let mut prev = SPEEDTEST_TIMELINE.sample(7500);
        for ms in (7600..=9000).step_by(100) {
            let v = SPEEDTEST_TIMELINE.sample(ms);
            assert!(v >= prev - 1e-5, "Settle from 0.82 to 0.84 should not reverse at {ms}ms");
            prev = v;
        }
    }

    #[test]
    fn test_linear_timeline() {
        const FRAMES: [Keyframe; 1] = [Keyframe::new(0, 0.0, Easing::Linear)];
        let ramp = KeyframeTimeline::new(&FRAMES, 1000, 1.0);
        assert!((ramp.sample(250) - 0.25).abs() < 1e-6);
        assert!((ramp.sample(500) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_timeline_returns_target() {
        let empty = KeyframeTimeline::new(&[], 1000, 0.5);
        assert_eq!(empty.sample(0), 0.5);
    }

    #[test]
    fn test_keyframes_ordered() {
        let unordered = [
            Keyframe::new(0, 0.0, Easing::Linear),
            Keyframe::new(500, 0.5, Easing::Linear),
            Keyframe::new(400, 0.4, Easing::Linear),
        ];
        assert!(!keyframes_ordered(&unordered, 1000));
        assert!(!keyframes_ordered(&SPEEDTEST_KEYFRAMES, 7000), "Keyframe past duration");
        assert!(keyframes_ordered(&SPEEDTEST_KEYFRAMES, SPEEDTEST_DURATION_MS));
    }
}
