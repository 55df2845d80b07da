use std::fmt;

use crate::color::Rgba;

/// Decimal places for hue, saturation, lightness and positions.
const COMPONENT_DECIMALS: u32 = 2;

/// One entry of a gradient's color-stop list, e.g. `hsl(0, 100%, 50%) 25%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStopToken {
    pub color: String,
    /// Rendered percentage, absent for the first and last stop.
    pub position: Option<String>,
}

impl fmt::Display for ColorStopToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} {}", self.color, position),
            None => f.write_str(&self.color),
        }
    }
}

/// Most decimal places an `f64` can carry meaningfully.
pub const MAX_DECIMALS: u32 = 17;

/// Round half away from zero to `decimals` places, at most
/// [`MAX_DECIMALS`]. Never returns `-0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor + 0.0
}

/// Render a color as legacy `hsl()` / `hsla()`.
///
/// Hue, saturation and lightness keep two decimals; alpha keeps
/// `alpha_decimals`. Trailing zeros are dropped. `hsl` is used only when
/// the rounded alpha is exactly 1, so a stop that rounds to fully
/// transparent still says `hsla(..., 0)`.
pub fn format_color(color: Rgba, alpha_decimals: u32) -> String {
    let hsl = color.to_hsla();
    let h = round_to(hsl.h.unwrap_or(0.0), COMPONENT_DECIMALS);
    // 359.996 rounds up to a full turn.
    let h = if h >= 360.0 { 0.0 } else { h };
    let s = round_to(hsl.s * 100.0, COMPONENT_DECIMALS);
    let l = round_to(hsl.l * 100.0, COMPONENT_DECIMALS);
    let a = round_to(hsl.a, alpha_decimals);

    if a >= 1.0 {
        format!("hsl({h}, {s}%, {l}%)")
    } else {
        format!("hsla({h}, {s}%, {l}%, {a})")
    }
}

/// Render a stop position in `[0, 1]` as a percentage; `None` at the ends.
pub fn format_position(x: f64) -> Option<String> {
    if x <= 0.0 || x >= 1.0 {
        return None;
    }
    Some(format!("{}%", round_to(x * 100.0, COMPONENT_DECIMALS)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(a: f64) -> Rgba {
        Rgba::BLACK.with_alpha(a)
    }

    // ── round_to ──────────────────────────────────────────────────────────

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.4975, 1), 0.5);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.0 / 3.0, 5), 0.66667);
        assert_eq!(round_to(0.7, 0), 1.0);
        assert!(round_to(-0.0001, 2).is_sign_positive());
    }

    #[test]
    fn huge_precision_is_capped() {
        assert_eq!(round_to(0.5, 400), 0.5);
        assert_eq!(round_to(1.0, u32::MAX), 1.0);
        assert_eq!(format_color(black(1.0), 400), "hsl(0, 0%, 0%)");
        assert_eq!(format_color(black(0.0), 400), "hsla(0, 0%, 0%, 0)");
    }

    // ── format_color ──────────────────────────────────────────────────────

    #[test]
    fn opaque_uses_hsl() {
        assert_eq!(format_color(Rgba::new(1.0, 0.0, 0.0, 1.0), 5), "hsl(0, 100%, 50%)");
        assert_eq!(format_color(Rgba::from_u8(0, 128, 0), 5), "hsl(120, 100%, 25.1%)");
    }

    #[test]
    fn translucent_uses_hsla() {
        assert_eq!(format_color(black(0.91730123), 5), "hsla(0, 0%, 0%, 0.9173)");
        assert_eq!(format_color(black(0.4975), 1), "hsla(0, 0%, 0%, 0.5)");
    }

    #[test]
    fn zero_alpha_is_explicit() {
        assert_eq!(format_color(black(0.0), 0), "hsla(0, 0%, 0%, 0)");
        assert_eq!(format_color(black(0.4), 0), "hsla(0, 0%, 0%, 0)");
        assert_eq!(format_color(black(0.00001), 3), "hsla(0, 0%, 0%, 0)");
    }

    #[test]
    fn alpha_rounding_to_one_drops_the_a() {
        assert_eq!(format_color(black(0.6), 0), "hsl(0, 0%, 0%)");
        assert_eq!(format_color(black(0.999999), 5), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn achromatic_hue_is_zero() {
        assert_eq!(format_color(Rgba::new(0.5, 0.5, 0.5, 1.0), 5), "hsl(0, 0%, 50%)");
    }

    // ── format_position ───────────────────────────────────────────────────

    #[test]
    fn positions() {
        assert_eq!(format_position(0.0), None);
        assert_eq!(format_position(1.0), None);
        assert_eq!(format_position(0.25).as_deref(), Some("25%"));
        assert_eq!(format_position(1.0 / 12.0).as_deref(), Some("8.33%"));
        assert_eq!(format_position(11.0 / 12.0).as_deref(), Some("91.67%"));
    }

    #[test]
    fn token_display() {
        let token = ColorStopToken { color: "hsl(0, 100%, 50%)".into(), position: Some("25%".into()) };
        assert_eq!(token.to_string(), "hsl(0, 100%, 50%) 25%");
        let token = ColorStopToken { color: "red".into(), position: None };
        assert_eq!(token.to_string(), "red");
    }
}
