use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::color::ColorParseError;

// ── TransformError ────────────────────────────────────────────────────────

/// Why a gradient occurrence was left as it was.
///
/// None of these stop a stylesheet pass; they are reported per occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A timing-shaped argument that is not a usable curve, e.g.
    /// `cubic-bezier()` with three numbers or an unregistered name.
    UnrecognizedCurve(String),
    /// A color is a CSS custom property and cannot be resolved ahead of time.
    UnresolvableColor(String),
    /// Fewer than two colors.
    InsufficientColors(usize),
    /// Colors carry explicit stop positions; those gradients are not re-eased.
    ExplicitStopPositions,
    /// No timing function and no default configured.
    NoTimingFunction,
    /// A color could not be parsed for interpolation.
    InterpolationFailure { value: String, source: ColorParseError },
}

impl TransformError {
    /// Failures worth surfacing to the user. The other variants are
    /// ordinary "nothing to do" outcomes.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::InterpolationFailure { .. })
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCurve(token) => write!(f, "unrecognized easing function {token:?}"),
            Self::UnresolvableColor(color) => write!(f, "color {color:?} is a custom property"),
            Self::InsufficientColors(n) => write!(f, "need at least two colors, found {n}"),
            Self::ExplicitStopPositions => f.write_str("color stops have explicit positions"),
            Self::NoTimingFunction => f.write_str("no easing function and no default configured"),
            Self::InterpolationFailure { value, .. } => write!(
                f,
                "Couldn't parse:\n{value}\nCheck the syntax to see if it's correct/supported."
            ),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InterpolationFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid config: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
