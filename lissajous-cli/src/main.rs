//! lissajous - CLI for Lissajous figure generation
//!
//! Usage:
//!   lissajous generate [options]     Generate a figure (SVG, JSON or points)
//!   lissajous colors                 List palette colors
//!   lissajous settings               Print default settings as YAML
//!   lissajous benchmark              Benchmark curve generation

mod cli;

use clap::{Parser, Subcommand};
use env_logger::Env;

use cli::{BenchmarkArgs, ColorsArgs, GenerateArgs, SettingsArgs};

#[derive(Subcommand)]
enum Command {
    /// Generate a Lissajous figure
    Generate(GenerateArgs),
    /// List the colors in the palette
    Colors(ColorsArgs),
    /// Print the default settings file
    Settings(SettingsArgs),
    /// Time curve generation at increasing resolutions
    Benchmark(BenchmarkArgs),
}

#[derive(Parser)]
#[command(name = "lissajous", version)]
#[command(about = "Draw Lissajous figures: x = sin(a*t + shift), y = cos(b*t)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => cli::cmd_generate(args),
        Command::Colors(args) => cli::cmd_colors(args),
        Command::Settings(args) => cli::cmd_settings(args),
        Command::Benchmark(args) => cli::cmd_benchmark(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
