use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::model::{normalize_hue, Hsla, Hsva, Oklab, Oklch, Rgba};

/// The space two colors are blended in.
///
/// Hue-bearing spaces (`Hsl`, `Hsv`, `Oklch`) travel the shorter arc around
/// the hue circle. When one endpoint has no hue (grays, black, white) the
/// other endpoint's hue is used throughout, so a fade to gray does not sweep
/// through unrelated hues.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorSpace {
    /// Straight per-channel sRGB blend.
    Rgb,
    /// Per-channel blend of squared sRGB values, which keeps midpoints from
    /// going muddy.
    Lrgb,
    Hsl,
    Hsv,
    Oklab,
    Oklch,
}

impl ColorSpace {
    pub const ALL: [Self; 6] = [Self::Rgb, Self::Lrgb, Self::Hsl, Self::Hsv, Self::Oklab, Self::Oklch];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Lrgb => "lrgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }

    /// Blend `a` towards `b` by `t` (clamped to `[0, 1]`).
    ///
    /// The result is clamped into the sRGB gamut.
    pub fn mix(self, a: Rgba, b: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mixed = match self {
            Self::Rgb => Rgba::new(lerp(a.r, b.r, t), lerp(a.g, b.g, t), lerp(a.b, b.b, t), lerp(a.a, b.a, t)),
            Self::Lrgb => Rgba::new(
                lerp_squared(a.r, b.r, t),
                lerp_squared(a.g, b.g, t),
                lerp_squared(a.b, b.b, t),
                lerp(a.a, b.a, t),
            ),
            Self::Hsl => mix_hsl(a.to_hsla(), b.to_hsla(), t),
            Self::Hsv => mix_hsv(a.to_hsva(), b.to_hsva(), t),
            Self::Oklab => {
                let (x, y) = (a.to_oklab(), b.to_oklab());
                Rgba::from_oklab(Oklab {
                    l: lerp(x.l, y.l, t),
                    a: lerp(x.a, y.a, t),
                    b: lerp(x.b, y.b, t),
                    alpha: lerp(x.alpha, y.alpha, t),
                })
            }
            Self::Oklch => {
                let (x, y) = (a.to_oklch(), b.to_oklch());
                Rgba::from_oklch(Oklch {
                    l: lerp(x.l, y.l, t),
                    c: lerp(x.c, y.c, t),
                    h: mix_hue(x.h, y.h, t),
                    alpha: lerp(x.alpha, y.alpha, t),
                })
            }
        };
        mixed.clamped()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color space name that is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorSpace(pub String);

impl fmt::Display for UnknownColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ColorSpace::ALL.iter().map(|s| s.name()).collect();
        write!(f, "unknown color space {:?} (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownColorSpace {}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "srgb" {
            return Ok(Self::Rgb);
        }
        Self::ALL
            .into_iter()
            .find(|space| space.name() == lower)
            .ok_or_else(|| UnknownColorSpace(s.to_string()))
    }
}

impl TryFrom<String> for ColorSpace {
    type Error = UnknownColorSpace;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ─── Blending helpers ────────────────────────────────────────────────────────

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn lerp_squared(a: f64, b: f64, t: f64) -> f64 {
    (a * a * (1.0 - t) + b * b * t).sqrt()
}

/// Shortest-arc hue blend. An undefined hue adopts the other one.
fn mix_hue(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
    match (a, b) {
        (Some(h0), Some(h1)) => {
            let dh = if h1 > h0 && h1 - h0 > 180.0 {
                h1 - (h0 + 360.0)
            } else if h1 < h0 && h0 - h1 > 180.0 {
                h1 + 360.0 - h0
            } else {
                h1 - h0
            };
            Some(normalize_hue(h0 + t * dh))
        }
        (Some(h), None) | (None, Some(h)) => Some(h),
        (None, None) => None,
    }
}

fn mix_hsl(x: Hsla, y: Hsla, t: f64) -> Rgba {
    // Black and white have no meaningful saturation either: keep the
    // chromatic endpoint's so the blend does not wash out halfway.
    let s = match (x.h, y.h) {
        (Some(_), None) if y.l == 0.0 || y.l == 1.0 => x.s,
        (None, Some(_)) if x.l == 0.0 || x.l == 1.0 => y.s,
        _ => lerp(x.s, y.s, t),
    };
    Rgba::from_hsla(Hsla {
        h: mix_hue(x.h, y.h, t),
        s,
        l: lerp(x.l, y.l, t),
        a: lerp(x.a, y.a, t),
    })
}

fn mix_hsv(x: Hsva, y: Hsva, t: f64) -> Rgba {
    Rgba::from_hsva(Hsva {
        h: mix_hue(x.h, y.h, t),
        s: lerp(x.s, y.s, t),
        v: lerp(x.v, y.v, t),
        a: lerp(x.a, y.a, t),
    })
}
