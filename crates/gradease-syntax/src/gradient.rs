//! Locating gradient calls inside a declaration value and splitting their
//! argument lists.
//!
//! Everything here is purely textual. Whether a timing-shaped argument is a
//! curve the engine can actually evaluate is decided downstream.

use std::ops::Range;

// ── GradientKind ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    /// CSS function name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear-gradient",
            Self::Radial => "radial-gradient",
        }
    }

    /// Only the exact unprefixed names match; `repeating-*` and vendor
    /// spellings are left alone.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("linear-gradient") {
            Some(Self::Linear)
        } else if name.eq_ignore_ascii_case("radial-gradient") {
            Some(Self::Radial)
        } else {
            None
        }
    }
}

// ── find_gradients ────────────────────────────────────────────────────────

/// A gradient function call found inside a value.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCall {
    pub kind: GradientKind,
    /// Byte range of the whole call, name through closing `)`.
    pub span: Range<usize>,
    /// Byte range of the text between the parentheses.
    pub args_span: Range<usize>,
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

/// Find every `linear-gradient(...)` / `radial-gradient(...)` call in `value`,
/// in source order. An unbalanced call ends the scan.
pub fn find_gradients(value: &str) -> Vec<GradientCall> {
    let bytes = value.as_bytes();
    let mut calls = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            q @ (b'"' | b'\'') => i = skip_string(bytes, i, q),
            b if is_ident_byte(b) && !b.is_ascii_digit() => {
                let start = i;
                while i < bytes.len() && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                if bytes.get(i) != Some(&b'(') {
                    continue;
                }
                let Some(close) = matching_paren(bytes, i) else { break };
                if let Some(kind) = GradientKind::from_name(&value[start..i]) {
                    calls.push(GradientCall { kind, span: start..close + 1, args_span: i + 1..close });
                    i = close + 1;
                } else {
                    // Step inside: a gradient may be nested in another function.
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    calls
}

/// Index just past the string literal opening at `start`.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index of the `)` matching the `(` at `open`.
fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            q @ (b'"' | b'\'') => {
                i = skip_string(bytes, i, q);
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

// ── Splitting ─────────────────────────────────────────────────────────────

/// Split on bytes matching `is_sep` at parenthesis depth 0, outside strings.
/// Pieces are trimmed; empty pieces are dropped.
fn split_top_level(text: &str, is_sep: impl Fn(u8) -> bool) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            q @ (b'"' | b'\'') => {
                i = skip_string(bytes, i, q);
                continue;
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b if depth == 0 && is_sep(b) => {
                parts.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(text[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Split a gradient argument list on its top-level commas.
///
/// ```
/// use gradease_syntax::gradient::split_args;
///
/// assert_eq!(
///     split_args("black, cubic-bezier(0.4, 0, 1, 1), rgba(0, 0, 0, 0)"),
///     vec!["black", "cubic-bezier(0.4, 0, 1, 1)", "rgba(0, 0, 0, 0)"],
/// );
/// ```
pub fn split_args(text: &str) -> Vec<&str> {
    split_top_level(text, |b| b == b',')
}

fn split_words(text: &str) -> Vec<&str> {
    split_top_level(text, |b| b.is_ascii_whitespace())
}

// ── Classification ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ArgKind<'a> {
    /// `to right`, `45deg`, `circle at top right`, ...
    Direction,
    /// Shaped like a timing function. Not validated.
    Timing,
    /// A color, optionally followed by explicit stop positions.
    Color { color: &'a str, positions: Vec<&'a str> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientArg<'a> {
    pub text: &'a str,
    pub kind: ArgKind<'a>,
}

impl GradientArg<'_> {
    /// Whether the argument references a CSS custom property.
    pub fn is_variable(&self) -> bool {
        contains_var(self.text)
    }
}

/// The classified arguments of one gradient call.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientArgs<'a> {
    pub kind: GradientKind,
    pub args: Vec<GradientArg<'a>>,
}

impl<'a> GradientArgs<'a> {
    pub fn parse(kind: GradientKind, text: &'a str) -> Self {
        let args = split_args(text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let kind = if i == 0 && is_direction(kind, text) {
                    ArgKind::Direction
                } else if is_timing_like(text) {
                    ArgKind::Timing
                } else {
                    let mut words = split_words(text).into_iter();
                    let color = words.next().unwrap_or(text);
                    ArgKind::Color { color, positions: words.collect() }
                };
                GradientArg { text, kind }
            })
            .collect();
        Self { kind, args }
    }

    pub fn direction(&self) -> Option<&'a str> {
        self.args.iter().find(|a| a.kind == ArgKind::Direction).map(|a| a.text)
    }

    /// Timing-shaped arguments in source order.
    pub fn timing(&self) -> Vec<&'a str> {
        self.args.iter().filter(|a| a.kind == ArgKind::Timing).map(|a| a.text).collect()
    }

    /// Color arguments in source order.
    pub fn colors(&self) -> impl Iterator<Item = &GradientArg<'a>> {
        self.args.iter().filter(|a| matches!(a.kind, ArgKind::Color { .. }))
    }

    /// The first argument, direction included, that references a custom property.
    pub fn first_variable(&self) -> Option<&GradientArg<'a>> {
        self.args.iter().find(|a| a.is_variable())
    }

    pub fn has_stop_positions(&self) -> bool {
        self.args
            .iter()
            .any(|a| matches!(&a.kind, ArgKind::Color { positions, .. } if !positions.is_empty()))
    }
}

fn contains_var(text: &str) -> bool {
    text.to_ascii_lowercase().contains("var(")
}

const SIDES: [&str; 4] = ["top", "bottom", "left", "right"];
const ANGLE_UNITS: [&str; 4] = ["deg", "grad", "rad", "turn"];
const RADIAL_WORDS: [&str; 6] = [
    "circle",
    "ellipse",
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
];
const LENGTH_UNITS: [&str; 10] = ["%", "px", "em", "rem", "vw", "vh", "vmin", "vmax", "ch", "ex"];

fn is_number(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+'))
        && text.parse::<f64>().is_ok()
}

fn with_unit(text: &str, units: &[&str]) -> bool {
    units
        .iter()
        .any(|unit| text.len() > unit.len() && text.to_ascii_lowercase().ends_with(unit)
            && is_number(&text[..text.len() - unit.len()]))
}

/// `to <side> [<side>]`, an angle, or (radial only) a shape/size/position clause.
pub fn is_direction(kind: GradientKind, text: &str) -> bool {
    let words = split_words(text);
    let lower: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();

    if lower.first().map(String::as_str) == Some("to") {
        return (2..=3).contains(&lower.len()) && lower[1..].iter().all(|w| SIDES.contains(&w.as_str()));
    }
    if words.len() == 1 && with_unit(words[0], &ANGLE_UNITS) {
        return true;
    }
    if kind == GradientKind::Radial {
        if lower.iter().any(|w| w == "at" || RADIAL_WORDS.contains(&w.as_str())) {
            return true;
        }
        return words.iter().all(|w| w == &"0" || with_unit(w, &LENGTH_UNITS));
    }
    false
}

const TIMING_KEYWORDS: [&str; 7] = [
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "linear",
    "step-start",
    "step-end",
];
const TIMING_FUNCTIONS: [&str; 3] = ["cubic-bezier(", "steps(", "easing("];

/// Whether `text` has the shape of a timing function.
///
/// Extended curves are spelled in camel case after `ease`, e.g.
/// `easeInOutCubic`.
pub fn is_timing_like(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if TIMING_KEYWORDS.contains(&lower.as_str()) {
        return true;
    }
    if TIMING_FUNCTIONS.iter().any(|f| lower.starts_with(f)) && lower.ends_with(')') {
        return true;
    }
    text.strip_prefix("ease").is_some_and(|rest| {
        rest.starts_with(|c: char| c.is_ascii_uppercase()) && rest.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(kind: GradientKind, text: &str) -> Vec<ArgKind<'_>> {
        GradientArgs::parse(kind, text).args.into_iter().map(|a| a.kind).collect()
    }

    fn color(c: &str) -> ArgKind<'_> {
        ArgKind::Color { color: c, positions: Vec::new() }
    }

    // ── find_gradients ────────────────────────────────────────────────────

    #[test]
    fn finds_single_call() {
        let value = "linear-gradient(red, ease, blue)";
        let calls = find_gradients(value);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, GradientKind::Linear);
        assert_eq!(&value[calls[0].args_span.clone()], "red, ease, blue");
        assert_eq!(calls[0].span, 0..value.len());
    }

    #[test]
    fn finds_multiple_calls_with_trailing_values() {
        let value = "radial-gradient(circle, red, blue) center, linear-gradient(black, white) no-repeat";
        let calls = find_gradients(value);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].kind, GradientKind::Radial);
        assert_eq!(&value[calls[1].args_span.clone()], "black, white");
    }

    #[test]
    fn nested_parens_inside_args() {
        let value = "linear-gradient(rgba(0, 0, 0, 0.5), cubic-bezier(0.4, 0, 1, 1), hsl(0, 0%, 0%))";
        let calls = find_gradients(value);
        assert_eq!(calls[0].span.end, value.len());
    }

    #[test]
    fn ignores_repeating_and_prefixed() {
        assert!(find_gradients("repeating-linear-gradient(red, blue)").is_empty());
        assert!(find_gradients("-webkit-linear-gradient(red, blue)").is_empty());
    }

    #[test]
    fn function_name_is_case_insensitive() {
        assert_eq!(find_gradients("Linear-Gradient(red, blue)").len(), 1);
    }

    #[test]
    fn ignores_names_in_strings() {
        assert!(find_gradients("url('linear-gradient(a, b)')").is_empty());
    }

    #[test]
    fn unbalanced_call_stops_scan() {
        assert!(find_gradients("linear-gradient(red, blue").is_empty());
    }

    // ── split_args ────────────────────────────────────────────────────────

    #[test]
    fn split_respects_depth() {
        assert_eq!(
            split_args("to right, rgb(1, 2, 3), steps(4, jump-end), red"),
            vec!["to right", "rgb(1, 2, 3)", "steps(4, jump-end)", "red"]
        );
    }

    #[test]
    fn split_drops_empty_pieces() {
        assert_eq!(split_args(" red , , blue "), vec!["red", "blue"]);
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn classifies_linear_args() {
        assert_eq!(
            classify(GradientKind::Linear, "to right, green, ease, red"),
            vec![ArgKind::Direction, color("green"), ArgKind::Timing, color("red")]
        );
    }

    #[test]
    fn angle_directions() {
        assert!(is_direction(GradientKind::Linear, "45deg"));
        assert!(is_direction(GradientKind::Linear, "-0.25turn"));
        assert!(is_direction(GradientKind::Linear, "1.5rad"));
        assert!(!is_direction(GradientKind::Linear, "deg"));
        assert!(!is_direction(GradientKind::Linear, "red"));
    }

    #[test]
    fn side_directions() {
        assert!(is_direction(GradientKind::Linear, "to top left"));
        assert!(!is_direction(GradientKind::Linear, "to middle"));
    }

    #[test]
    fn radial_clauses() {
        assert!(is_direction(GradientKind::Radial, "circle at top right"));
        assert!(is_direction(GradientKind::Radial, "ellipse"));
        assert!(is_direction(GradientKind::Radial, "at center"));
        assert!(is_direction(GradientKind::Radial, "50px 20%"));
        assert!(!is_direction(GradientKind::Linear, "circle at top right"));
        assert!(!is_direction(GradientKind::Radial, "red"));
    }

    #[test]
    fn direction_only_in_first_position() {
        assert_eq!(
            classify(GradientKind::Linear, "red, 45deg, blue"),
            vec![color("red"), color("45deg"), color("blue")]
        );
    }

    #[test]
    fn timing_shapes() {
        for t in ["ease", "EASE-IN", "linear", "step-end", "cubic-bezier(1, 2, 3)", "steps(4)",
                  "easing(in-out)", "easeInOutCubic", "easeNowhere"] {
            assert!(is_timing_like(t), "{t} should look like a timing function");
        }
        for t in ["funky-ease", "easel", "ease-in-outer", "red", "cubic-bezier"] {
            assert!(!is_timing_like(t), "{t} should not look like a timing function");
        }
    }

    #[test]
    fn color_with_positions() {
        assert_eq!(
            classify(GradientKind::Linear, "black 20px, rgb(0, 0, 0) 10% 40%"),
            vec![
                ArgKind::Color { color: "black", positions: vec!["20px"] },
                ArgKind::Color { color: "rgb(0, 0, 0)", positions: vec!["10%", "40%"] },
            ]
        );
        assert!(GradientArgs::parse(GradientKind::Linear, "black 20px, white").has_stop_positions());
    }

    #[test]
    fn variables_are_detected() {
        let args = GradientArgs::parse(GradientKind::Linear, "var(--start-color), ease, var(--end-color)");
        assert_eq!(args.first_variable().map(|a| a.text), Some("var(--start-color)"));
        assert_eq!(args.colors().count(), 2);
        assert_eq!(args.timing(), vec!["ease"]);
    }

    #[test]
    fn accessors() {
        let args = GradientArgs::parse(GradientKind::Radial, "circle at top right, red, ease-in-out, blue");
        assert_eq!(args.direction(), Some("circle at top right"));
        assert_eq!(args.timing(), vec!["ease-in-out"]);
        assert!(args.first_variable().is_none());
        assert!(!args.has_stop_positions());
    }
}
