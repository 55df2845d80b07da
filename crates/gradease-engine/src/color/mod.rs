//! Color records, CSS color parsing and blending spaces.

mod model;
mod parse;
mod space;

pub use model::{linear_to_srgb, normalize_hue, srgb_to_linear, Hsla, Hsva, Oklab, Oklch, Rgba};
pub use parse::{parse_color, ColorParseError};
pub use space::{ColorSpace, UnknownColorSpace};
