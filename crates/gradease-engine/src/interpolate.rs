use crate::color::{parse_color, ColorParseError, ColorSpace, Rgba};

/// The ordered control colors of one gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
    /// Which inputs were the literal `transparent` keyword.
    transparent: Vec<bool>,
}

impl Palette {
    /// Parse CSS color strings.
    pub fn from_css(colors: &[&str]) -> Result<Self, ColorParseError> {
        if colors.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let parsed = colors.iter().map(|c| parse_color(c)).collect::<Result<Vec<_>, _>>()?;
        let transparent = colors.iter().map(|c| is_transparent_keyword(c)).collect();
        Ok(Self { colors: parsed, transparent })
    }

    /// Color at `weight` along the palette.
    ///
    /// `[0, 1]` is split into `len - 1` equal segments and the two colors
    /// bounding the selected segment are mixed in `space`. `weight` is
    /// clamped, so overshooting curves hold the end colors.
    ///
    /// When exactly one end of the segment is the `transparent` keyword it
    /// takes the other end's color with zero alpha, so the fade keeps its
    /// hue instead of passing through black.
    pub fn interpolate(&self, weight: f64, space: ColorSpace) -> Rgba {
        let weight = weight.clamp(0.0, 1.0);
        match self.colors.as_slice() {
            [] => Rgba::TRANSPARENT,
            [only] => *only,
            colors => {
                let segments = colors.len() - 1;
                let scaled = weight * segments as f64;
                let index = (scaled.floor() as usize).min(segments - 1);
                let (from, to) = self.segment(index);
                space.mix(from, to, scaled - index as f64)
            }
        }
    }

    /// Endpoints of segment `index` with the transparent fix applied.
    fn segment(&self, index: usize) -> (Rgba, Rgba) {
        let (from, to) = (self.colors[index], self.colors[index + 1]);
        match (self.transparent[index], self.transparent[index + 1]) {
            (true, false) => (to.with_alpha(0.0), to),
            (false, true) => (from, from.with_alpha(0.0)),
            _ => (from, to),
        }
    }
}

fn is_transparent_keyword(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("transparent")
}
