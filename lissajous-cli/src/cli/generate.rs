//! Generate command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Args;
use log::debug;

use lissajous::{FigureSettings, Resolution};

use super::common::{OutputFormat, load_palette, render_figure, write_output};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Frequency of the x component
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub freq_x: Option<f64>,

    /// Frequency of the y component
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub freq_y: Option<f64>,

    /// Phase shift applied to x, in radians
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: Option<f64>,

    /// Number of points on the curve (at least 2)
    #[arg(short, long, allow_negative_numbers = true)]
    pub resolution: Option<Resolution>,

    /// Line color: palette label, palette color, or #rrggbb
    #[arg(short, long)]
    pub color: Option<String>,

    /// Line width (1-4)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// YAML settings file; flags override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// JSON palette file (default: built-in palette)
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Canvas size for SVG output
    #[arg(long, default_value_t = 500.0)]
    pub size: f64,

    /// Output file (- for stdout, default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Layer flags over the settings file over the defaults.
    fn settings(&self) -> Result<FigureSettings> {
        let mut settings = match &self.settings {
            Some(path) => FigureSettings::load(path)
                .with_context(|| format!("Failed to load settings {}", path.display()))?,
            None => FigureSettings::default(),
        };

        if let Some(freq_x) = self.freq_x {
            settings.freq_x = freq_x;
        }
        if let Some(freq_y) = self.freq_y {
            settings.freq_y = freq_y;
        }
        if let Some(shift) = self.shift {
            settings.shift = shift;
        }
        if let Some(resolution) = self.resolution {
            settings.resolution = resolution.get();
        }
        if let Some(color) = &self.color {
            settings.color = color.clone();
        }
        if let Some(width) = self.width {
            settings.width = width;
        }

        Ok(settings)
    }
}

/// Execute the generate command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    ensure!(
        args.size.is_finite() && args.size > 0.0,
        "Canvas size must be a positive number, got {}",
        args.size
    );

    let settings = args.settings()?;
    settings.validate()?;
    debug!("settings: {:?}", settings);

    let palette = load_palette(args.palette.as_deref())?;
    let style = settings.style(&palette)?;
    let figure = settings.generate()?;

    eprintln!(
        "Generated {} points (x: {}, y: {}, shift: {})",
        figure.len(), settings.freq_x, settings.freq_y, settings.shift
    );

    let content = render_figure(&figure, &style, args.format, args.size)?;
    write_output(&content, args.output.as_deref())
}
