// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! An easing maps linear time progress `t` in `[0, 1]` to eased progress. All
//! curves here satisfy `f(0) = 0` and `f(1) = 1`; inputs outside `[0, 1]` are
//! clamped first.

/// An easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in (`t^3`).
    EaseIn,
    /// Cubic ease-out. Used as a no-bounce stand-in for spring motion.
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
    /// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
    ///
    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of
    /// time; they are clamped when evaluating.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Easing {
    /// The default timing curve, `cubic-bezier(0.42, 0, 0.58, 1)`.
    pub const STANDARD: Self = Self::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Evaluates the curve at linear progress `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let bez = Bezier1d::new(x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                let s = bez.solve(t);
                Bezier1d::new(y1, y2).sample(s)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One axis of a cubic bézier anchored at 0 and 1, in polynomial form.
#[derive(Clone, Copy, Debug)]
struct Bezier1d {
    a: f64,
    b: f64,
    c: f64,
}

impl Bezier1d {
    const EPSILON: f64 = 1e-7;

    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn sample(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    fn derivative(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }

    /// Finds the curve parameter whose sample equals `x`.
    ///
    /// Newton's method converges in a handful of steps for well-behaved
    /// curves; bisection covers flat spots where the derivative vanishes.
    fn solve(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = self.sample(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = self.derivative(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..64 {
            let sx = self.sample(s);
            if (sx - x).abs() < Self::EPSILON {
                break;
            }
            if x > sx {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::STANDARD,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert!(easing.apply(-3.0).abs() < 1e-9, "{easing:?} below 0");
            assert!((easing.apply(7.0) - 1.0).abs() < 1e-9, "{easing:?} above 1");
        }
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v + 1e-9 >= prev, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn symmetric_bezier_passes_through_midpoint() {
        let v = Easing::STANDARD.apply(0.5);
        assert!((v - 0.5).abs() < 1e-5, "got {v}");
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let linear = Easing::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-5, "t = {t}");
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
    }
}
