use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gradease_engine::logging::{init_logging, LoggingConfig};
use gradease_engine::{ColorSpace, CurveRegistry, Diagnostic, TransformConfig, Transformer};
use log::info;

/// Rewrite CSS gradients that name an easing function into plain color stops.
#[derive(Parser, Debug)]
#[command(name = "gradease", version, about, long_about = None)]
struct Cli {
    /// Stylesheet to read, `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file (`stops`, `alphaDecimals`, `colorMode`, `defaultEasing`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Samples per smooth curve, ends included
    #[arg(long)]
    stops: Option<usize>,

    /// Decimal places kept on alpha
    #[arg(long)]
    alpha_decimals: Option<u32>,

    /// Blending space: rgb, lrgb, hsl, hsv, oklab or oklch
    #[arg(long)]
    color_mode: Option<ColorSpace>,

    /// Easing applied to gradients that name none
    #[arg(long)]
    default_easing: Option<String>,

    /// Log filter in `env_logger` syntax, e.g. `debug`
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    /// File config (or defaults) with command-line flags on top.
    fn transform_config(&self) -> Result<TransformConfig> {
        let mut config = match &self.config {
            Some(path) => TransformConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TransformConfig::default(),
        };
        if let Some(stops) = self.stops {
            config.stops = stops;
        }
        if let Some(decimals) = self.alpha_decimals {
            config.alpha_decimals = decimals;
        }
        if let Some(space) = self.color_mode {
            config.color_mode = Some(space);
        }
        if let Some(easing) = &self.default_easing {
            config.default_easing = Some(easing.clone());
        }
        Ok(config)
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_output(path: Option<&Path>, css: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(path) => {
            fs::write(path, css).with_context(|| format!("writing {}", path.display()))
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(css.as_bytes()).context("writing stdout")?;
            stdout.flush().context("writing stdout")
        }
    }
}

/// `path:line:col: message`, the message naming the value left unchanged.
fn located(path: &Path, diagnostic: &Diagnostic) -> String {
    format!("{}:{diagnostic}", path.display())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..LoggingConfig::default() });

    let config = cli.transform_config()?;
    let transformer = Transformer::new(config, CurveRegistry::builtin()).context("invalid configuration")?;

    let src = read_input(&cli.input)?;
    let report = transformer
        .transform_stylesheet(&src)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    for diagnostic in &report.diagnostics {
        info!("{}", located(&cli.input, diagnostic));
    }
    info!(
        "{}: {} rewritten, {} stripped, {} unchanged",
        cli.input.display(),
        report.rewritten,
        report.stripped,
        report.unchanged
    );

    write_output(cli.output.as_deref(), &report.css)
}
