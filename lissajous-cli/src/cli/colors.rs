//! Colors command - list palette entries.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lissajous::FigureSettings;

use super::common::load_palette;

#[derive(Args, Debug)]
pub struct ColorsArgs {
    /// JSON palette file (default: built-in palette)
    #[arg(long)]
    pub palette: Option<PathBuf>,
}

/// Execute the colors command.
///
/// The default line color is marked with `*`.
pub fn cmd_colors(args: ColorsArgs) -> Result<()> {
    let palette = load_palette(args.palette.as_deref())?;
    let default_color = FigureSettings::default().color;

    println!("Available colors:");
    for (label, color) in palette.iter() {
        let marker = if color.eq_ignore_ascii_case(&default_color) { '*' } else { ' ' };
        println!(" {} {:<16} {}", marker, label, color);
    }
    Ok(())
}
