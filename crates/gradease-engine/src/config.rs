use std::path::Path;

use serde::Deserialize;

use crate::color::ColorSpace;
use crate::error::ConfigError;

/// Options for the gradient transform.
///
/// Deserializes from camelCase JSON; missing keys take their defaults:
///
/// ```
/// use gradease_engine::TransformConfig;
///
/// let config = TransformConfig::from_json(r#"{ "stops": 7, "colorMode": "oklch" }"#).unwrap();
/// assert_eq!(config.stops, 7);
/// assert_eq!(config.alpha_decimals, 5);
/// assert!(config.default_easing.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformConfig {
    /// Samples per smooth curve, ends included.
    pub stops: usize,
    pub alpha_decimals: u32,
    /// Blending space. When unset, standard CSS curves blend in `lrgb`
    /// and extended curves in `oklch`.
    pub color_mode: Option<ColorSpace>,
    /// Curve applied to gradients that name none.
    pub default_easing: Option<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            stops: 13,
            alpha_decimals: 5,
            color_mode: None,
            default_easing: None,
        }
    }
}

impl TransformConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }
}
