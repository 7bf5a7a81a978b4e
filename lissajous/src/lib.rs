//! # lissajous
//!
//! Lissajous curve generation library.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod error;
pub mod generator;
pub mod geometry;
pub mod palette;
pub mod settings;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use error::{CurveError, SettingsError};
pub use generator::{
    CurveParameters, DEFAULT_RESOLUTION, LissajousGenerator, MIN_RESOLUTION, Resolution, generate,
};
pub use geometry::{Figure, Point};
pub use palette::Palette;
pub use settings::{FigureSettings, MAX_LINE_WIDTH, MIN_LINE_WIDTH};
pub use svg::{Style, figure_to_json, figure_to_svg};
