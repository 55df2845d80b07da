//! Gradease engine crate.
//!
//! Rewrites CSS gradients that name an easing function into plain gradients
//! with a dense list of color stops that follow the curve.
//!
//! ```
//! use gradease_engine::{CurveRegistry, TransformConfig, Transformer};
//!
//! let transformer = Transformer::new(TransformConfig::default(), CurveRegistry::builtin()).unwrap();
//! let report = transformer
//!     .transform_stylesheet("a { background: linear-gradient(black, ease-in, white) }")
//!     .unwrap();
//! assert_eq!(report.rewritten, 1);
//! assert!(report.css.contains("hsl(0, 0%, 0%), "));
//! ```

pub mod color;
pub mod easing;
pub mod error;
pub mod format;
pub mod interpolate;
pub mod stops;

pub mod config;
pub mod logging;
pub mod policy;
pub mod transform;

pub use color::ColorSpace;
pub use config::TransformConfig;
pub use easing::{CurveRegistry, EasingCurve};
pub use error::{ConfigError, TransformError};
pub use policy::{Outcome, Transformer};
pub use transform::{Diagnostic, TransformReport};
