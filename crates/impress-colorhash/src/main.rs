//! impress-colorhash CLI
//!
//! Prints a deterministic color for each argument, or for each line of stdin
//! when no arguments are given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use impress_colorhash::{decode_utf8, ColorHash, PaletteConfig, Result};
use tracing_subscriber::EnvFilter;

/// Derive stable colors from strings.
#[derive(Debug, Parser)]
#[command(name = "impress-colorhash", version)]
struct Cli {
    /// Strings to color. Reads stdin line by line when omitted.
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Palette file (.toml or .json)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Comma-separated saturation levels, overriding the palette file
    #[arg(long, value_delimiter = ',', value_name = "LEVELS")]
    saturation: Option<Vec<f64>>,

    /// Comma-separated lightness levels, overriding the palette file
    #[arg(long, value_delimiter = ',', value_name = "LEVELS")]
    lightness: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Hex,
    Rgb,
    Hsl,
    Json,
}

impl Cli {
    fn palette(&self) -> Result<PaletteConfig> {
        let mut palette = match &self.config {
            Some(path) => PaletteConfig::load(path)?,
            None => PaletteConfig::default(),
        };
        if let Some(levels) = &self.saturation {
            palette.saturation_levels = levels.clone();
        }
        if let Some(levels) = &self.lightness {
            palette.lightness_levels = levels.clone();
        }
        Ok(palette)
    }
}

fn render(colors: &ColorHash, text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => colors.hex(text),
        OutputFormat::Rgb => {
            let rgb = colors.rgb(text);
            format!("{} {} {}", rgb.r, rgb.g, rgb.b)
        }
        OutputFormat::Hsl => colors.hsl(text).to_string(),
        OutputFormat::Json => serde_json::json!({
            "text": text,
            "hash": colors.hash(text),
            "hsl": colors.hsl(text),
            "rgb": colors.rgb(text),
            "hex": colors.hex(text),
        })
        .to_string(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let colors = ColorHash::new(cli.palette()?)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.texts.is_empty() {
        for text in &cli.texts {
            writeln!(out, "{}", render(&colors, text, cli.format))?;
        }
        return Ok(());
    }

    tracing::debug!("No arguments, reading stdin");
    for line in io::stdin().lock().split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text = decode_utf8(&line)?;
        writeln!(out, "{}", render(&colors, text, cli.format))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
