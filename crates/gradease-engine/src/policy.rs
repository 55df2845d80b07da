//! Deciding, per gradient occurrence, whether and how to rewrite it.
//!
//! Checks run in this order and the first that applies wins:
//!
//! 1. a timing-shaped argument that is not a usable curve: leave as is
//! 2. a `var(...)` argument: drop the timing function if there is one,
//!    otherwise leave as is
//! 3. colors with explicit positions: leave as is
//! 4. fewer than two colors: leave as is
//! 5. no timing function and no configured default: leave as is
//! 6. rewrite into eased color stops
//!
//! A color that fails to parse during the rewrite is logged and the
//! occurrence is left as is. Nothing here aborts a stylesheet pass.

use gradease_syntax::gradient::ArgKind;
use gradease_syntax::{GradientArgs, GradientKind};
use log::{debug, warn};

use crate::color::ColorSpace;
use crate::config::TransformConfig;
use crate::easing::{CurveRegistry, EasingCurve};
use crate::error::{ConfigError, TransformError};
use crate::stops::GradientContext;

/// What happened to one gradient's argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Replaced by eased color stops.
    Rewritten(String),
    /// Custom-property colors: only the timing function was removed.
    Stripped(String),
    /// Left byte-for-byte as it was.
    Unchanged(TransformError),
}

impl Outcome {
    /// The new argument text, if any.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            Self::Rewritten(text) | Self::Stripped(text) => Some(text),
            Self::Unchanged(_) => None,
        }
    }
}

/// Applies a validated [`TransformConfig`] to gradients.
#[derive(Debug, Clone)]
pub struct Transformer<'r> {
    config: TransformConfig,
    registry: &'r CurveRegistry,
    default_curve: Option<EasingCurve>,
}

impl<'r> Transformer<'r> {
    /// Validates `config`: at least two stops, and a default easing (if
    /// any) that names a known curve.
    pub fn new(config: TransformConfig, registry: &'r CurveRegistry) -> Result<Self, ConfigError> {
        if config.stops < 2 {
            return Err(ConfigError::Invalid(format!("stops must be at least 2, got {}", config.stops)));
        }
        let default_curve = match &config.default_easing {
            Some(token) => Some(EasingCurve::parse(token, registry).ok_or_else(|| {
                ConfigError::Invalid(format!("defaultEasing {token:?} is not a recognized easing function"))
            })?),
            None => None,
        };
        Ok(Self { config, registry, default_curve })
    }

    /// Blending space for `curve`, honoring the configured one.
    pub fn color_space(&self, curve: &EasingCurve) -> ColorSpace {
        self.config.color_mode.unwrap_or(if curve.is_extended() {
            ColorSpace::Oklch
        } else {
            ColorSpace::Lrgb
        })
    }

    /// Transform the text between the parentheses of one gradient call.
    pub fn transform_gradient(&self, kind: GradientKind, args_text: &str) -> Outcome {
        let args = GradientArgs::parse(kind, args_text);

        let mut curves = Vec::new();
        for token in args.timing() {
            match EasingCurve::parse(token, self.registry) {
                Some(curve) => curves.push(curve),
                None => {
                    debug!("{}({args_text}): unrecognized easing {token:?}", kind.name());
                    return Outcome::Unchanged(TransformError::UnrecognizedCurve(token.to_string()));
                }
            }
        }
        // With several timing functions the first one wins.
        let curve = curves.into_iter().next();

        if let Some(var) = args.first_variable() {
            if curve.is_none() {
                return Outcome::Unchanged(TransformError::UnresolvableColor(var.text.to_string()));
            }
            let kept: Vec<&str> = args
                .args
                .iter()
                .filter(|a| a.kind != ArgKind::Timing)
                .map(|a| a.text)
                .collect();
            debug!("{}({args_text}): custom properties, dropping easing only", kind.name());
            return Outcome::Stripped(kept.join(", "));
        }

        if args.has_stop_positions() {
            return Outcome::Unchanged(TransformError::ExplicitStopPositions);
        }

        let colors: Vec<&str> = args.colors().map(|a| a.text).collect();
        if colors.len() < 2 {
            return Outcome::Unchanged(TransformError::InsufficientColors(colors.len()));
        }

        let Some(curve) = curve.or_else(|| self.default_curve.clone()) else {
            return Outcome::Unchanged(TransformError::NoTimingFunction);
        };

        let ctx = GradientContext {
            colors,
            direction: args.direction(),
            stops: self.config.stops,
            alpha_decimals: self.config.alpha_decimals,
            space: self.color_space(&curve),
            curve,
        };
        match ctx.render() {
            Ok(text) => {
                debug!("{}({args_text}): eased with {} in {}", kind.name(), ctx.curve, ctx.space);
                Outcome::Rewritten(text)
            }
            Err(source) => {
                let err = TransformError::InterpolationFailure {
                    value: format!("{}({args_text})", kind.name()),
                    source,
                };
                warn!("{err}");
                Outcome::Unchanged(err)
            }
        }
    }
}
