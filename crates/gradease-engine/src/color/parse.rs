use std::fmt;

use super::model::Rgba;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// `var(...)`, `currentcolor` and friends: only known at render time.
    Unresolvable(String),
    /// Rejected by the CSS color parser.
    Invalid { text: String, reason: String },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color string"),
            Self::Unresolvable(text) => write!(f, "color {text:?} cannot be resolved at build time"),
            Self::Invalid { text, reason } => write!(f, "invalid color {text:?}: {reason}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Keywords that only mean something once the page is rendered.
const UNRESOLVABLE: [&str; 5] = ["currentcolor", "inherit", "initial", "unset", "revert"];

/// Parse a CSS color.
///
/// Hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, the named colors and
/// `transparent` are handled by `csscolorparser`. Custom properties and
/// cascade keywords are rejected up front. Channels are clamped into
/// `[0, 1]`.
pub fn parse_color(text: &str) -> Result<Rgba, ColorParseError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let lower = s.to_ascii_lowercase();
    if lower.contains("var(") || UNRESOLVABLE.contains(&lower.as_str()) {
        return Err(ColorParseError::Unresolvable(s.to_string()));
    }
    if !s.is_ascii() {
        return Err(ColorParseError::Invalid { text: s.to_string(), reason: "non-ASCII input".into() });
    }

    let c = csscolorparser::parse(s)
        .map_err(|err| ColorParseError::Invalid { text: s.to_string(), reason: err.to_string() })?;
    Ok(Rgba::new(f64::from(c.r), f64::from(c.g), f64::from(c.b), f64::from(c.a)).clamped())
}
