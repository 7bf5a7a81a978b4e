//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `generate` - Generate a figure from parameters and/or a settings file
//! - `colors` - List palette colors
//! - `settings` - Print the default settings YAML
//! - `benchmark` - Benchmark curve generation performance

pub mod common;
pub mod generate;
pub mod colors;
pub mod settings;
pub mod benchmark;

pub use generate::{GenerateArgs, cmd_generate};
pub use colors::{ColorsArgs, cmd_colors};
pub use settings::{SettingsArgs, cmd_settings};
pub use benchmark::{BenchmarkArgs, cmd_benchmark};
