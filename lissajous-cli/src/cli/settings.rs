//! Settings command - print the default settings file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lissajous::{FigureSettings, MAX_LINE_WIDTH, MIN_LINE_WIDTH};

use super::common::write_output;

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Output file (- for stdout, default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the settings command.
pub fn cmd_settings(args: SettingsArgs) -> Result<()> {
    let yaml = FigureSettings::default().to_yaml_string()?;
    let content = format!(
        "# lissajous figure settings\n\
         # x = sin(freq_x * t + shift), y = cos(freq_y * t), t in [0, 2π]\n\
         # width: {}..{}, resolution: at least 2\n{}",
        MIN_LINE_WIDTH, MAX_LINE_WIDTH, yaml
    );
    write_output(&content, args.output.as_deref())
}
