//! Easing curves: parsing timing-function tokens and evaluating them.
//!
//! | Token                          | Variant                        |
//! |--------------------------------|--------------------------------|
//! | `linear`                       | [`EasingCurve::Linear`]        |
//! | `ease`, `ease-in`, ...         | [`EasingCurve::Named`]         |
//! | `cubic-bezier(x1, y1, x2, y2)` | [`EasingCurve::CubicBezier`]   |
//! | `steps(n, jump)`, `step-end`   | [`EasingCurve::Steps`]         |
//! | `easeInOutCubic`, ...          | [`EasingCurve::Extended`]      |
//!
//! `easing(<curve>)` wraps any of the above, and also accepts the short
//! aliases `in`, `out`, `in-out` and `inout`.

mod bezier;
mod registry;
mod steps;

use std::fmt;

pub use bezier::CubicBezier;
pub use registry::{CurveRegistry, EasingFn};
pub use steps::{JumpTerm, Steps};

// ── NamedCurve ────────────────────────────────────────────────────────────

/// The CSS easing keywords that are shorthands for a cubic Bézier.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NamedCurve {
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl NamedCurve {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword.to_ascii_lowercase().as_str() {
            "ease" => Self::Ease,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            _ => return None,
        })
    }

    pub const fn bezier(self) -> CubicBezier {
        let (x1, y1, x2, y2) = match self {
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        };
        CubicBezier { x1, y1, x2, y2 }
    }
}

// ── ExtendedCurve ─────────────────────────────────────────────────────────

/// A curve resolved from a [`CurveRegistry`].
#[derive(Debug, Clone)]
pub struct ExtendedCurve {
    name: String,
    f: EasingFn,
}

impl ExtendedCurve {
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ── EasingCurve ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum EasingCurve {
    Linear,
    Named(NamedCurve),
    CubicBezier(CubicBezier),
    Steps(Steps),
    Extended(ExtendedCurve),
}

impl EasingCurve {
    /// Recognize a timing-function token.
    ///
    /// Returns `None` for anything that is not a well-formed curve,
    /// including `cubic-bezier()` with other than four numbers and names
    /// missing from `registry`.
    pub fn parse(token: &str, registry: &CurveRegistry) -> Option<Self> {
        let token = token.trim();
        let lower = token.to_ascii_lowercase();

        match lower.as_str() {
            "linear" => return Some(Self::Linear),
            "step-start" => return Steps::new(1, JumpTerm::Start).map(Self::Steps),
            "step-end" => return Steps::new(1, JumpTerm::End).map(Self::Steps),
            _ => {}
        }
        if let Some(named) = NamedCurve::from_keyword(&lower) {
            return Some(Self::Named(named));
        }
        if let Some(args) = function_args(token, "cubic-bezier") {
            return parse_cubic_bezier(args).map(Self::CubicBezier);
        }
        if let Some(args) = function_args(token, "steps") {
            return parse_steps(args).map(Self::Steps);
        }
        if let Some(inner) = function_args(token, "easing") {
            let inner = inner.trim();
            return match inner.to_ascii_lowercase().as_str() {
                "in" => Some(Self::Named(NamedCurve::EaseIn)),
                "out" => Some(Self::Named(NamedCurve::EaseOut)),
                "in-out" | "inout" => Some(Self::Named(NamedCurve::EaseInOut)),
                _ => Self::parse(inner, registry),
            };
        }
        registry
            .get(token)
            .map(|(name, f)| Self::Extended(ExtendedCurve { name: name.to_string(), f }))
    }

    /// Eased value at `x`, which is clamped to `[0, 1]`.
    ///
    /// Bézier and extended curves may return values outside `[0, 1]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Self::Linear => x,
            Self::Named(named) => named.bezier().evaluate(x),
            Self::CubicBezier(bezier) => bezier.evaluate(x),
            Self::Steps(steps) => steps.evaluate(x),
            Self::Extended(ext) => (ext.f)(x),
        }
    }

    /// Extended curves come from outside the CSS keyword set.
    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Named(named) => f.write_str(named.keyword()),
            Self::CubicBezier(bezier) => fmt::Display::fmt(bezier, f),
            Self::Steps(steps) => fmt::Display::fmt(steps, f),
            Self::Extended(ext) => f.write_str(&ext.name),
        }
    }
}

/// Curves are identified by their normalized text.
impl PartialEq for EasingCurve {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

// ── Token helpers ─────────────────────────────────────────────────────────

/// The text between the parentheses of `name(...)`, if `token` is a call
/// to `name`.
fn function_args<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    let open = token.find('(')?;
    if !token[..open].trim_end().eq_ignore_ascii_case(name) {
        return None;
    }
    token[open + 1..].strip_suffix(')')
}

fn parse_cubic_bezier(args: &str) -> Option<CubicBezier> {
    let values: Vec<f64> = args
        .split(',')
        .map(|v| v.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    match values.as_slice() {
        &[x1, y1, x2, y2] => CubicBezier::new(x1, y1, x2, y2),
        _ => None,
    }
}

fn parse_steps(args: &str) -> Option<Steps> {
    let mut parts = args.split(',').map(str::trim);
    let count = parts.next()?.parse::<u32>().ok()?;
    let jump = match parts.next() {
        Some(keyword) => JumpTerm::from_keyword(keyword)?,
        None => JumpTerm::End,
    };
    if parts.next().is_some() {
        return None;
    }
    Steps::new(count, jump)
}
