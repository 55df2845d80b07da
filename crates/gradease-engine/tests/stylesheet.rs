//! Whole-stylesheet fixtures.

use gradease_engine::{ColorSpace, CurveRegistry, TransformConfig, TransformReport, Transformer};
use pretty_assertions::assert_eq;

const EASE_GREEN_TO_RED: &str = "hsl(120, 100%, 25.1%), hsl(87, 100%, 24.19%) 8.33%, \
    hsl(56.6, 100%, 23.49%) 16.67%, hsl(36.24, 100%, 31.96%) 25%, hsl(25.85, 100%, 37.94%) 33.33%, \
    hsl(19.45, 100%, 42%) 41.67%, hsl(14.95, 100%, 44.79%) 50%, hsl(11.46, 100%, 46.73%) 58.33%, \
    hsl(8.59, 100%, 48.08%) 66.67%, hsl(6.11, 100%, 49%) 75%, hsl(3.9, 100%, 49.59%) 83.33%, \
    hsl(1.89, 100%, 49.9%) 91.67%, hsl(0, 100%, 50%)";

fn run_with(config: TransformConfig, src: &str) -> TransformReport {
    Transformer::new(config, CurveRegistry::builtin())
        .unwrap()
        .transform_stylesheet(src)
        .unwrap()
}

fn run(src: &str) -> String {
    run_with(TransformConfig::default(), src).css
}

// ── rewriting ─────────────────────────────────────────────────────────────

#[test]
fn ease_gradient_with_direction() {
    assert_eq!(
        run("a{ background: linear-gradient(to right, green, ease, red); }"),
        format!("a{{ background: linear-gradient(to right, {EASE_GREEN_TO_RED}); }}")
    );
}

#[test]
fn steps_gradient_doubles_stops() {
    assert_eq!(
        run("a{ background: linear-gradient(to right, green, steps(4, skip-none), red); }"),
        "a{ background: linear-gradient(to right, hsl(120, 100%, 25.1%), hsl(120, 100%, 25.1%) 25%, \
         hsl(42.59, 100%, 28.87%) 25%, hsl(42.59, 100%, 28.87%) 50%, hsl(21.3, 100%, 40.82%) 50%, \
         hsl(21.3, 100%, 40.82%) 75%, hsl(0, 100%, 50%) 75%, hsl(0, 100%, 50%)); }"
    );
}

#[test]
fn radial_gradient_keeps_shape_clause() {
    let config = TransformConfig { stops: 5, alpha_decimals: 3, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: radial-gradient(circle at top right, red, ease-in-out, blue) }").css,
        "a{ background: radial-gradient(circle at top right, hsl(0, 100%, 50%), hsl(336.89, 100%, 46.66%) 25%, \
         hsl(300, 100%, 35.36%) 50%, hsl(263.11, 100%, 46.66%) 75%, hsl(240, 100%, 50%)) }"
    );
}

#[test]
fn hsl_color_mode() {
    let config = TransformConfig { color_mode: Some(ColorSpace::Hsl), ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(green, ease, red) }").css,
        "a{ background: linear-gradient(hsl(120, 100%, 25.1%), hsl(111.5, 100%, 26.86%) 8.33%, \
         hsl(93.52, 100%, 30.59%) 16.67%, hsl(70.98, 100%, 35.27%) 25%, hsl(50.9, 100%, 39.44%) 33.33%, \
         hsl(35.33, 100%, 42.67%) 41.67%, hsl(23.71, 100%, 45.08%) 50%, hsl(15.18, 100%, 46.85%) 58.33%, \
         hsl(9.02, 100%, 48.13%) 66.67%, hsl(4.74, 100%, 49.02%) 75%, hsl(1.98, 100%, 49.59%) 83.33%, \
         hsl(0.47, 100%, 49.9%) 91.67%, hsl(0, 100%, 50%)) }"
    );
}

#[test]
fn three_colors_share_the_curve() {
    let config = TransformConfig { stops: 5, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(red, linear, yellow, blue) }").css,
        "a{ background: linear-gradient(hsl(0, 100%, 50%), hsl(42.43, 100%, 50%) 25%, hsl(60, 100%, 50%) 50%, \
         hsl(0, 0%, 70.71%) 75%, hsl(240, 100%, 50%)) }"
    );
}

#[test]
fn default_easing_fills_in() {
    let config = TransformConfig { default_easing: Some("ease".into()), ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(to right, green, red) }").css,
        format!("a{{ background: linear-gradient(to right, {EASE_GREEN_TO_RED}) }}")
    );
}

// ── alpha ─────────────────────────────────────────────────────────────────

#[test]
fn transparent_keeps_the_neighbour_hue() {
    let config = TransformConfig { stops: 5, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(red, ease-in, transparent) }").css,
        "a{ background: linear-gradient(hsl(0, 100%, 50%), hsla(0, 100%, 50%, 0.90654) 25%, \
         hsla(0, 100%, 50%, 0.68464) 50%, hsla(0, 100%, 50%, 0.37814) 75%, hsla(0, 100%, 50%, 0)) }"
    );
}

#[test]
fn one_alpha_decimal() {
    let config = TransformConfig { stops: 5, alpha_decimals: 1, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(black, linear, transparent) }").css,
        "a{ background: linear-gradient(hsl(0, 0%, 0%), hsla(0, 0%, 0%, 0.8) 25%, hsla(0, 0%, 0%, 0.5) 50%, \
         hsla(0, 0%, 0%, 0.3) 75%, hsla(0, 0%, 0%, 0)) }"
    );
}

#[test]
fn zero_alpha_decimals_keeps_transparent_explicit() {
    let config = TransformConfig { stops: 5, alpha_decimals: 0, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(black, linear, transparent) }").css,
        "a{ background: linear-gradient(hsl(0, 0%, 0%), hsl(0, 0%, 0%) 25%, hsl(0, 0%, 0%) 50%, \
         hsla(0, 0%, 0%, 0) 75%, hsla(0, 0%, 0%, 0)) }"
    );
}

#[test]
fn huge_alpha_precision_stays_valid() {
    let config = TransformConfig { stops: 3, alpha_decimals: 400, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(black, linear, transparent) }").css,
        "a{ background: linear-gradient(hsl(0, 0%, 0%), hsla(0, 0%, 0%, 0.5) 50%, hsla(0, 0%, 0%, 0)) }"
    );
}

#[test]
fn transparent_between_colors_fades_each_side() {
    let config = TransformConfig { stops: 5, color_mode: Some(ColorSpace::Rgb), ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(red, linear, transparent, blue) }").css,
        "a{ background: linear-gradient(hsl(0, 100%, 50%), hsla(0, 100%, 50%, 0.5) 25%, \
         hsla(240, 100%, 50%, 0) 50%, hsla(240, 100%, 50%, 0.5) 75%, hsl(240, 100%, 50%)) }"
    );
}

// ── left alone ────────────────────────────────────────────────────────────

#[test]
fn custom_properties_only_lose_the_easing() {
    assert_eq!(
        run("a{ background: linear-gradient(var(--start-color), ease, var(--end-color)); }"),
        "a{ background: linear-gradient(var(--start-color), var(--end-color)); }"
    );
}

#[test]
fn custom_property_direction_only_loses_the_easing() {
    assert_eq!(
        run("a{ background: linear-gradient(var(--dir), red, ease, blue); }"),
        "a{ background: linear-gradient(var(--dir), red, blue); }"
    );
    let src = "a{ background: linear-gradient(var(--dir), red, blue); }";
    assert_eq!(run(src), src);
}

#[test]
fn malformed_cubic_bezier_is_untouched() {
    let src = "a{ background: linear-gradient(black, cubic-bezier(0.48, 0.30, 0.64), transparent); }";
    assert_eq!(run(src), src);
    assert_eq!(run(&run(src)), src);
}

#[test]
fn plain_gradients_are_untouched() {
    let src = "a{ background: linear-gradient(black 10%, ease, white), linear-gradient(red, blue); }";
    assert_eq!(run(src), src);
}

#[test]
fn modern_color_syntax_is_understood() {
    let config = TransformConfig { stops: 3, ..TransformConfig::default() };
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(rgb(0 0 0 / 50%), linear, hsl(0 0% 0%)) }").css,
        "a{ background: linear-gradient(hsla(0, 0%, 0%, 0.5), hsla(0, 0%, 0%, 0.75) 50%, hsl(0, 0%, 0%)) }"
    );
}

#[test]
fn bad_color_reports_and_continues() {
    let src = "a{ background: linear-gradient(red, ease, nope) }\nb{ background: linear-gradient(to right, green, ease, red) }";
    let report = run_with(TransformConfig::default(), src);
    assert_eq!(report.rewritten, 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].to_string(),
        "1:4: Couldn't parse:\nlinear-gradient(red, ease, nope)\nCheck the syntax to see if it's correct/supported."
    );
    assert!(report.css.starts_with("a{ background: linear-gradient(red, ease, nope) }\n"));
    assert!(report.css.ends_with(&format!("linear-gradient(to right, {EASE_GREEN_TO_RED}) }}")));
}

// ── keyframes ─────────────────────────────────────────────────────────────

#[test]
fn keyframes_are_left_alone() {
    let keyframes = "@keyframes slideIn { from { background: linear-gradient(45deg, red, ease, blue); } \
                     to { background: linear-gradient(45deg, red, ease, blue); } }";
    let src = format!("{keyframes} .test {{ background: linear-gradient(to right, green, ease, red); }}");
    assert_eq!(
        run(&src),
        format!("{keyframes} .test {{ background: linear-gradient(to right, {EASE_GREEN_TO_RED}); }}")
    );
}

#[test]
fn nested_prefixed_keyframes_are_left_alone() {
    let src = "@media screen { @-webkit-keyframes k { 50% { background: linear-gradient(red, ease, blue) } } }";
    assert_eq!(run(src), src);
}

// ── config ────────────────────────────────────────────────────────────────

#[test]
fn config_from_json() {
    let config = TransformConfig::from_json(r#"{ "stops": 5, "alphaDecimals": 1 }"#).unwrap();
    assert_eq!(
        run_with(config, "a{ background: linear-gradient(black, linear, transparent) }").css,
        "a{ background: linear-gradient(hsl(0, 0%, 0%), hsla(0, 0%, 0%, 0.8) 25%, hsla(0, 0%, 0%, 0.5) 50%, \
         hsla(0, 0%, 0%, 0.3) 75%, hsla(0, 0%, 0%, 0)) }"
    );
}
