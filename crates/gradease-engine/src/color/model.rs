// Color records and the conversions between them.
//
// Single-character variable names (r, g, b, h, s, l, v, a) follow the usual
// color-science convention.
//
// Conversion pipeline:
//
//   sRGB ↔ HSL / HSV            (cylindrical views of sRGB)
//   sRGB ↔ linear sRGB ↔ Oklab ↔ OKLCH
//
// Everything is f64: the formatter rounds to two decimals at the very end and
// the numbers must not drift before that.

/// Straight-alpha sRGB color with channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL view of an sRGB color.
///
/// `h` is `None` for achromatic colors, where hue carries no information.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, `[0, 360)`.
    pub h: Option<f64>,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
    pub a: f64,
}

/// HSV view of an sRGB color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsva {
    pub h: Option<f64>,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Oklab coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

/// OKLCH coordinates. `h` is `None` when chroma is negligible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: Option<f64>,
    pub alpha: f64,
}

/// Below this chroma an OKLCH hue is treated as undefined.
const ACHROMATIC_CHROMA: f64 = 1e-5;

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit sRGB channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0, 1.0)
    }

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Clamps every channel into `[0, 1]`; out-of-gamut values from the
    /// perceptual spaces land on the sRGB boundary.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: clamp01(self.r),
            g: clamp01(self.g),
            b: clamp01(self.b),
            a: clamp01(self.a),
        }
    }

    // ── HSL / HSV ─────────────────────────────────────────────────────────

    pub fn to_hsla(self) -> Hsla {
        let Self { r, g, b, a } = self.clamped();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsla { h: None, s: 0.0, l, a };
        }

        let d = max - min;
        let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
        Hsla { h: Some(hue_of(r, g, b, max, d)), s, l, a }
    }

    pub fn from_hsla(hsla: Hsla) -> Self {
        let Hsla { h, s, l, a } = hsla;
        let h = h.unwrap_or(0.0);
        if s == 0.0 {
            return Self::new(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = normalize_hue(h) / 360.0;
        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    pub fn to_hsva(self) -> Hsva {
        let Self { r, g, b, a } = self.clamped();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if d == 0.0 { None } else { Some(hue_of(r, g, b, max, d)) };
        Hsva { h, s, v: max, a }
    }

    pub fn from_hsva(hsva: Hsva) -> Self {
        let Hsva { h, s, v, a } = hsva;
        if s == 0.0 {
            return Self::new(v, v, v, a);
        }

        let h = normalize_hue(h.unwrap_or(0.0)) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, a)
    }

    // ── Oklab / OKLCH ─────────────────────────────────────────────────────

    pub fn to_oklab(self) -> Oklab {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l = l.cbrt();
        let m = m.cbrt();
        let s = s.cbrt();

        Oklab {
            l: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
            alpha: self.a,
        }
    }

    pub fn from_oklab(lab: Oklab) -> Self {
        let l = lab.l + 0.396_337_777_4 * lab.a + 0.215_803_757_3 * lab.b;
        let m = lab.l - 0.105_561_345_8 * lab.a - 0.063_854_172_8 * lab.b;
        let s = lab.l - 0.089_484_177_5 * lab.a - 1.291_485_548_0 * lab.b;

        let l = l * l * l;
        let m = m * m * m;
        let s = s * s * s;

        let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
        let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s;

        Self::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b), lab.alpha)
    }

    pub fn to_oklch(self) -> Oklch {
        let lab = self.to_oklab();
        let c = lab.a.hypot(lab.b);
        let h = (c >= ACHROMATIC_CHROMA).then(|| normalize_hue(lab.b.atan2(lab.a).to_degrees()));
        Oklch { l: lab.l, c, h, alpha: lab.alpha }
    }

    pub fn from_oklch(lch: Oklch) -> Self {
        let h = lch.h.unwrap_or(0.0).to_radians();
        Self::from_oklab(Oklab {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
            alpha: lch.alpha,
        })
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[inline]
fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Normalize a hue angle to `[0, 360)`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Hue in degrees shared by the HSL and HSV views. `d` must be non-zero.
fn hue_of(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if r == max {
        (g - b) / d
    } else if g == max {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };
    normalize_hue(h * 60.0)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 { t + 1.0 } else if t > 1.0 { t - 1.0 } else { t };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// sRGB transfer function, decoding direction.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function, encoding direction.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
