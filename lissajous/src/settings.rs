//! Figure settings - the parameters and styling for one figure.
//!
//! Settings files are YAML. Every field is optional; anything left out
//! takes the default below.
//!
//! ```yaml
//! freq_x: 2
//! freq_y: 3
//! shift: 0
//! resolution: 20
//! color: blue
//! width: 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, SettingsError};
use crate::generator::{CurveParameters, DEFAULT_RESOLUTION, Resolution};
use crate::geometry::Figure;
use crate::palette::Palette;
use crate::svg::Style;

pub const MIN_LINE_WIDTH: u32 = 1;
pub const MAX_LINE_WIDTH: u32 = 4;

/// Everything needed to generate and draw one figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSettings {
    /// Frequency of the x component (default 2)
    pub freq_x: f64,
    /// Frequency of the y component (default 3)
    pub freq_y: f64,
    /// Phase shift applied to x, in radians (default 0)
    pub shift: f64,
    /// Number of sample points (default 20)
    pub resolution: usize,
    /// Palette label or color value (default "blue")
    pub color: String,
    /// Line width, 1 to 4 (default 2)
    pub width: u32,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            freq_x: 2.0,
            freq_y: 3.0,
            shift: 0.0,
            resolution: DEFAULT_RESOLUTION,
            color: "blue".to_string(),
            width: 2,
        }
    }
}

impl FigureSettings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every field without generating anything.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.parameters()?.validate()?;
        if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.width) {
            return Err(SettingsError::Invalid {
                name: "width",
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_LINE_WIDTH, MAX_LINE_WIDTH, self.width
                ),
            });
        }
        if self.color.trim().is_empty() {
            return Err(SettingsError::Invalid {
                name: "color",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Curve parameters described by these settings.
    pub fn parameters(&self) -> Result<CurveParameters, CurveError> {
        Ok(CurveParameters::new(
            self.freq_x,
            self.freq_y,
            self.shift,
            Resolution::new(self.resolution)?,
        ))
    }

    /// Generate the figure these settings describe.
    pub fn generate(&self) -> Result<Figure, CurveError> {
        self.parameters()?.generate()
    }

    /// Resolve the line style against `palette`.
    pub fn style(&self, palette: &Palette) -> Result<Style, SettingsError> {
        Ok(Style {
            color: palette.require(&self.color)?,
            width: f64::from(self.width),
        })
    }
}
