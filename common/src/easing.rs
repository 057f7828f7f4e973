//! Easing curves for keyframe segments.
//!
//! A cubic-bezier easing is the curve from `(0, 0)` to `(1, 1)` with control points
//! `(x1, y1)` and `(x2, y2)`. Evaluating it at a time fraction means finding the
//! curve parameter `t` whose x equals the fraction, then returning y at that `t`:
//!
//! ```text
//! x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³        x1, x2 ∈ [0, 1]
//! y(t) = 3(1-t)²t·y1 + 3(1-t)t²·y2 + t³        y1, y2 unrestricted
//! ```
//!
//! Because `x1` and `x2` are kept inside `[0, 1]`, `x(t)` is monotonic and the
//! solve always converges. The y control points may leave `[0, 1]`; that is how the
//! speed-test curve makes the needle overshoot and dip between breakpoints.

/// Newton-Raphson iterations tried before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Bisection iterations (each halves the bracket; 24 is below f32 resolution).
const BISECTION_ITERATIONS: usize = 24;

/// Acceptable error on x when solving for the curve parameter.
const SOLVE_EPSILON: f32 = 1.0e-5;

/// Derivatives flatter than this stop the Newton iterations.
const MIN_SLOPE: f32 = 1.0e-6;

/// Maps a linear time fraction to an eased progress fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Output equals input.
    Linear,
    /// Cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Decelerating curve: starts at full speed and eases into the end value.
pub const LINEAR_OUT_SLOW_IN: Easing = Easing::cubic(0.0, 0.0, 0.2, 1.0);

impl Easing {
    /// Build a cubic-bezier easing.
    pub const fn cubic(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Apply the easing to a time fraction.
    ///
    /// The fraction is clamped to `[0, 1]`; `0` maps to `0` and `1` maps to `1`
    /// exactly so keyframe values are hit without drift.
    pub fn transform(
        self,
        fraction: f32,
    ) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => fraction,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let t = solve_parameter(fraction, x1, x2);
                bezier(t, y1, y2)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self { Self::Linear }
}

/// One coordinate of the bezier at parameter `t` (end points fixed at 0 and 1).
#[inline]
fn bezier(
    t: f32,
    p1: f32,
    p2: f32,
) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Derivative of [`bezier`] with respect to `t`.
#[inline]
fn bezier_slope(
    t: f32,
    p1: f32,
    p2: f32,
) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Find `t` in `[0, 1]` such that `x(t) == x`.
fn solve_parameter(
    x: f32,
    x1: f32,
    x2: f32,
) -> f32 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(t, x1, x2) - x;
        if error.abs() < SOLVE_EPSILON {
            return t;
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < MIN_SLOPE {
            break;
        }
        t -= error / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const OVERSHOOT: Easing = Easing::cubic(0.0, 1.5, 0.8, 1.0);
    const DIP: Easing = Easing::cubic(0.2, -1.5, 0.0, 1.0);

    #[test]
    fn test_endpoints_exact() {
        for easing in [Easing::Linear, LINEAR_OUT_SLOW_IN, OVERSHOOT, DIP] {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?} should start at 0");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?} should end at 1");
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(OVERSHOOT.transform(-0.5), 0.0);
        assert_eq!(OVERSHOOT.transform(1.5), 1.0);
    }

    #[test]
    fn test_linear_identity() {
        for i in 0..=10 {
            let f = i as f32 / 10.0;
            assert!((Easing::Linear.transform(f) - f).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_out_slow_in_decelerates() {
        let mut prev = 0.0;
        for i in 1..=20 {
            let f = i as f32 / 20.0;
            let v = LINEAR_OUT_SLOW_IN.transform(f);
            assert!(v >= prev, "Curve should be monotonic at {f}");
            assert!(v >= f - 1e-4, "Decelerating curve stays above linear at {f}, got {v}");
            prev = v;
        }
        assert!(LINEAR_OUT_SLOW_IN.transform(0.5) > 0.7);
    }

    #[test]
    fn test_overshoot_exceeds_one() {
        let peak = (1..20)
            .map(|i| OVERSHOOT.transform(i as f32 / 20.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "y1 = 1.5 should push the curve past 1, peak was {peak}");
    }

    #[test]
    fn test_dip_goes_negative() {
        let low = (1..20)
            .map(|i| DIP.transform(i as f32 / 20.0))
            .fold(f32::MAX, f32::min);
        assert!(low < 0.0, "y1 = -1.5 should dip below 0, low was {low}");
    }

    #[test]
    fn test_solver_accuracy() {
        for i in 1..100 {
            let x = i as f32 / 100.0;
            let t = solve_parameter(x, 0.2, 0.0);
            assert!((bezier(t, 0.2, 0.0) - x).abs() < 1e-4, "Solve failed at x = {x}");
            assert!((0.0..=1.0).contains(&t));
        }
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Easing::default(), Easing::Linear);
    }
}
