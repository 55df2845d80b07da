//! Turning colors and an easing curve into a color-stop list.

use crate::color::{ColorParseError, ColorSpace};
use crate::easing::EasingCurve;
use crate::format::{format_color, format_position, ColorStopToken};
use crate::interpolate::Palette;

/// One sample of an eased gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    /// Position along the gradient line, `[0, 1]`.
    pub x: f64,
    /// Mixing weight after easing.
    pub y: f64,
}

/// Sample `curve` for a gradient.
///
/// Smooth curves get `stops` evenly spaced samples. Step curves ignore
/// `stops` and produce two coordinates per step, one at each edge, so the
/// rendered gradient has hard color changes at the risers.
pub fn coordinates(curve: &EasingCurve, stops: usize) -> Vec<Coordinate> {
    if let EasingCurve::Steps(steps) = curve {
        return steps
            .plateaus()
            .flat_map(|(x0, x1, y)| [Coordinate { x: x0, y }, Coordinate { x: x1, y }])
            .collect();
    }

    let intervals = stops.max(2) - 1;
    (0..=intervals)
        .map(|i| {
            let x = i as f64 / intervals as f64;
            Coordinate { x, y: curve.evaluate(x) }
        })
        .collect()
}

/// One token per coordinate, in order.
pub fn color_stops(
    palette: &Palette,
    coordinates: &[Coordinate],
    alpha_decimals: u32,
    space: ColorSpace,
) -> Vec<ColorStopToken> {
    coordinates
        .iter()
        .map(|c| ColorStopToken {
            color: format_color(palette.interpolate(c.y, space), alpha_decimals),
            position: format_position(c.x),
        })
        .collect()
}

/// Parse `colors`, sample `curve` and render the stop list.
pub fn generate(
    colors: &[&str],
    curve: &EasingCurve,
    stops: usize,
    alpha_decimals: u32,
    space: ColorSpace,
) -> Result<Vec<ColorStopToken>, ColorParseError> {
    let palette = Palette::from_css(colors)?;
    Ok(color_stops(&palette, &coordinates(curve, stops), alpha_decimals, space))
}

/// Everything needed to rewrite one gradient occurrence.
#[derive(Debug, Clone)]
pub struct GradientContext<'a> {
    pub colors: Vec<&'a str>,
    /// Direction or shape clause, emitted verbatim as the first argument.
    pub direction: Option<&'a str>,
    pub stops: usize,
    pub alpha_decimals: u32,
    pub space: ColorSpace,
    pub curve: EasingCurve,
}

impl GradientContext<'_> {
    /// The replacement argument list.
    pub fn render(&self) -> Result<String, ColorParseError> {
        let tokens = generate(&self.colors, &self.curve, self.stops, self.alpha_decimals, self.space)?;
        let args = self
            .direction
            .map(str::to_string)
            .into_iter()
            .chain(tokens.iter().map(ToString::to_string))
            .collect::<Vec<_>>();
        Ok(args.join(", "))
    }
}
