use std::fmt;

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing curve.
///
/// The end points are fixed at (0, 0) and (1, 1). The x coordinates of the
/// control points must lie in `[0, 1]` so the curve is a function of x; the
/// y coordinates are unbounded and may overshoot.
#[derive(Debug, Copy, Clone)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

const EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;

impl CubicBezier {
    /// `None` when a control point x lies outside `[0, 1]` or any value is
    /// not finite.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<Self> {
        let finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
        let x_ok = (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2);
        (finite && x_ok).then_some(Self { x1, y1, x2, y2 })
    }

    /// The y value of the curve where its x equals `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        sample(self.y1, self.y2, self.solve_t(x))
    }

    /// Curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f64) -> f64 {
        // Newton-Raphson converges in a few steps for well-behaved curves.
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // x(t) is monotonic on [0, 1], so bisection always terminates.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

/// One coordinate of the curve at parameter `t`, given that coordinate's
/// two control values. Horner form of
/// `3(1-t)²t·p1 + 3(1-t)t²·p2 + t³`.
#[inline]
fn sample(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
