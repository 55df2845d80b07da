use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

/// An easing function over `[0, 1]`.
pub type EasingFn = fn(f64) -> f64;

/// Named easing curves outside the CSS keyword set.
///
/// The built-in registry is created on first use and never changes. Tests
/// and embedders can build their own with [`CurveRegistry::empty`] and
/// [`CurveRegistry::with`].
#[derive(Debug, Clone, Default)]
pub struct CurveRegistry {
    curves: HashMap<String, EasingFn>,
}

static BUILTIN: LazyLock<CurveRegistry> = LazyLock::new(|| {
    BUILTIN_CURVES
        .iter()
        .fold(CurveRegistry::empty(), |registry, &(name, f)| registry.with(name, f))
});

impl CurveRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide registry of Penner-style curves
    /// (`easeInQuad`, `easeOutBounce`, ...).
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, f: EasingFn) -> Self {
        self.curves.insert(name.into(), f);
        self
    }

    /// Case-sensitive lookup, returning the registered name and function.
    pub fn get(&self, name: &str) -> Option<(&str, EasingFn)> {
        self.curves.get_key_value(name).map(|(k, f)| (k.as_str(), *f))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

// ─── Built-in curves ─────────────────────────────────────────────────────────

const BUILTIN_CURVES: [(&str, EasingFn); 30] = [
    ("easeInSine", in_sine),
    ("easeOutSine", out_sine),
    ("easeInOutSine", in_out_sine),
    ("easeInQuad", in_quad),
    ("easeOutQuad", out_quad),
    ("easeInOutQuad", in_out_quad),
    ("easeInCubic", in_cubic),
    ("easeOutCubic", out_cubic),
    ("easeInOutCubic", in_out_cubic),
    ("easeInQuart", in_quart),
    ("easeOutQuart", out_quart),
    ("easeInOutQuart", in_out_quart),
    ("easeInQuint", in_quint),
    ("easeOutQuint", out_quint),
    ("easeInOutQuint", in_out_quint),
    ("easeInExpo", in_expo),
    ("easeOutExpo", out_expo),
    ("easeInOutExpo", in_out_expo),
    ("easeInCirc", in_circ),
    ("easeOutCirc", out_circ),
    ("easeInOutCirc", in_out_circ),
    ("easeInBack", in_back),
    ("easeOutBack", out_back),
    ("easeInOutBack", in_out_back),
    ("easeInElastic", in_elastic),
    ("easeOutElastic", out_elastic),
    ("easeInOutElastic", in_out_elastic),
    ("easeInBounce", in_bounce),
    ("easeOutBounce", out_bounce),
    ("easeInOutBounce", in_out_bounce),
];

/// Mirror an ease-in into the matching ease-out.
#[inline]
fn reflect(f: EasingFn, t: f64) -> f64 {
    1.0 - f(1.0 - t)
}

/// Join an ease-in and its reflection at the midpoint.
#[inline]
fn symmetric(f: EasingFn, t: f64) -> f64 {
    if t < 0.5 { f(2.0 * t) / 2.0 } else { 1.0 - f(2.0 - 2.0 * t) / 2.0 }
}

fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}
fn out_sine(t: f64) -> f64 {
    reflect(in_sine, t)
}
fn in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

fn in_quad(t: f64) -> f64 {
    t * t
}
fn out_quad(t: f64) -> f64 {
    reflect(in_quad, t)
}
fn in_out_quad(t: f64) -> f64 {
    symmetric(in_quad, t)
}

fn in_cubic(t: f64) -> f64 {
    t * t * t
}
fn out_cubic(t: f64) -> f64 {
    reflect(in_cubic, t)
}
fn in_out_cubic(t: f64) -> f64 {
    symmetric(in_cubic, t)
}

fn in_quart(t: f64) -> f64 {
    t.powi(4)
}
fn out_quart(t: f64) -> f64 {
    reflect(in_quart, t)
}
fn in_out_quart(t: f64) -> f64 {
    symmetric(in_quart, t)
}

fn in_quint(t: f64) -> f64 {
    t.powi(5)
}
fn out_quint(t: f64) -> f64 {
    reflect(in_quint, t)
}
fn in_out_quint(t: f64) -> f64 {
    symmetric(in_quint, t)
}

fn in_expo(t: f64) -> f64 {
    if t <= 0.0 { 0.0 } else { 2f64.powf(10.0 * t - 10.0) }
}
fn out_expo(t: f64) -> f64 {
    if t >= 1.0 { 1.0 } else { reflect(in_expo, t) }
}
fn in_out_expo(t: f64) -> f64 {
    match t {
        t if t <= 0.0 => 0.0,
        t if t >= 1.0 => 1.0,
        t => symmetric(in_expo, t),
    }
}

fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}
fn out_circ(t: f64) -> f64 {
    reflect(in_circ, t)
}
fn in_out_circ(t: f64) -> f64 {
    symmetric(in_circ, t)
}

const BACK_OVERSHOOT: f64 = 1.701_58;

fn in_back(t: f64) -> f64 {
    let c = BACK_OVERSHOOT;
    (c + 1.0) * t * t * t - c * t * t
}
fn out_back(t: f64) -> f64 {
    reflect(in_back, t)
}
fn in_out_back(t: f64) -> f64 {
    let c = BACK_OVERSHOOT * 1.525;
    let s = 2.0 * t;
    if t < 0.5 {
        s * s * ((c + 1.0) * s - c) / 2.0
    } else {
        let u = s - 2.0;
        (u * u * ((c + 1.0) * u + c) + 2.0) / 2.0
    }
}

fn in_elastic(t: f64) -> f64 {
    match t {
        t if t <= 0.0 => 0.0,
        t if t >= 1.0 => 1.0,
        t => -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * (2.0 * PI / 3.0)).sin(),
    }
}
fn out_elastic(t: f64) -> f64 {
    reflect(in_elastic, t)
}
fn in_out_elastic(t: f64) -> f64 {
    const C: f64 = 2.0 * PI / 4.5;
    match t {
        t if t <= 0.0 => 0.0,
        t if t >= 1.0 => 1.0,
        t if t < 0.5 => -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C).sin()) / 2.0,
        t => 2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C).sin() / 2.0 + 1.0,
    }
}

fn out_bounce(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984_375
    }
}
fn in_bounce(t: f64) -> f64 {
    reflect(out_bounce, t)
}
fn in_out_bounce(t: f64) -> f64 {
    symmetric(in_bounce, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_family() {
        let registry = CurveRegistry::builtin();
        assert_eq!(registry.len(), 30);
        for family in ["Sine", "Quad", "Cubic", "Quart", "Quint", "Expo", "Circ", "Back", "Elastic", "Bounce"] {
            for prefix in ["easeIn", "easeOut", "easeInOut"] {
                assert!(registry.contains(&format!("{prefix}{family}")), "{prefix}{family}");
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(CurveRegistry::builtin().get("easeInQuad").is_some());
        assert!(CurveRegistry::builtin().get("easeinquad").is_none());
    }

    #[test]
    fn every_builtin_starts_at_zero_and_ends_at_one() {
        for (name, f) in BUILTIN_CURVES {
            assert!(f(0.0).abs() < 1e-9, "{name}(0) = {}", f(0.0));
            assert!((f(1.0) - 1.0).abs() < 1e-9, "{name}(1) = {}", f(1.0));
        }
    }

    #[test]
    fn in_out_curves_pass_through_midpoint() {
        for (name, f) in BUILTIN_CURVES.iter().filter(|(n, _)| n.starts_with("easeInOut")) {
            assert!((f(0.5) - 0.5).abs() < 1e-9, "{name}(0.5) = {}", f(0.5));
        }
    }

    #[test]
    fn spot_values() {
        assert!((in_quad(0.5) - 0.25).abs() < 1e-12);
        assert!((out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!(in_back(0.2) < 0.0);
        assert!(out_elastic(0.2) > 1.0);
    }

    #[test]
    fn custom_registry() {
        let registry = CurveRegistry::empty().with("easeSnap", |t| if t < 0.5 { 0.0 } else { 1.0 });
        assert_eq!(registry.names(), vec!["easeSnap"]);
        let (name, f) = registry.get("easeSnap").unwrap();
        assert_eq!(name, "easeSnap");
        assert_eq!(f(0.7), 1.0);
    }
}
