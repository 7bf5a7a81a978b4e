//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use lissajous::{Figure, Palette, Style, figure_to_json, figure_to_svg};

/// Output format for a generated figure.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
    /// One "x y" pair per line
    Points,
}

/// Render a figure in the requested format.
pub fn render_figure(figure: &Figure, style: &Style, format: OutputFormat, size: f64) -> Result<String> {
    Ok(match format {
        OutputFormat::Svg => figure_to_svg(figure, style, size),
        OutputFormat::Json => {
            let mut json = figure_to_json(figure).context("Failed to serialize figure")?;
            json.push('\n');
            json
        }
        OutputFormat::Points => figure_to_points(figure),
    })
}

/// Plain "x y" lines, full precision.
pub fn figure_to_points(figure: &Figure) -> String {
    let mut out = String::new();
    for p in figure {
        out.push_str(&format!("{} {}\n", p.x, p.y));
    }
    out
}

/// Load a palette file, or fall back to the built-in palette.
pub fn load_palette(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(path) => Palette::load(path)
            .with_context(|| format!("Failed to load palette {}", path.display())),
        None => Ok(Palette::default()),
    }
}

/// Write to a file, or to stdout when `output` is `None` or `-`.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote: {}", path.display());
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
