//! Named line colors.
//!
//! A palette maps human-facing labels to color values the renderer
//! understands. It is a plain value handed to whoever needs it; nothing
//! here is global or loaded behind the caller's back.
//!
//! Palette files are JSON objects of `"label": "color"` pairs:
//!
//! ```json
//! { "Blue": "blue", "Dark red": "#8b0000" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::SettingsError;

/// Built-in palette: matplotlib's tableau color names, which are also
/// valid SVG color keywords.
const BUILTIN: &[(&str, &str)] = &[
    ("Black", "black"),
    ("Blue", "blue"),
    ("Brown", "brown"),
    ("Cyan", "cyan"),
    ("Gray", "gray"),
    ("Green", "green"),
    ("Magenta", "magenta"),
    ("Olive", "olive"),
    ("Orange", "orange"),
    ("Pink", "pink"),
    ("Purple", "purple"),
    ("Red", "red"),
];

/// Ordered (label, color) table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(label, color)| (label.to_string(), color.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Parse a palette from a JSON object. Entries end up sorted by label.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let table: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries: table.into_iter().collect() })
    }

    /// Load a palette file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let palette = Self::from_json_str(&content)?;
        debug!("loaded {} palette entries from {}", palette.len(), path.display());
        Ok(palette)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Color value for a label. Exact match wins, then case-insensitive.
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .or_else(|| self.entries.iter().find(|(l, _)| l.eq_ignore_ascii_case(label)))
            .map(|(_, c)| c.as_str())
    }

    /// First label whose color is `color`.
    pub fn label_for(&self, color: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(color))
            .map(|(l, _)| l.as_str())
    }

    /// Turn a user-supplied name into a color value.
    ///
    /// Accepts a label, a color value already in the palette, or a
    /// `#rgb` / `#rrggbb` hex literal.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if let Some(color) = self.color_for(name) {
            return Some(color.to_string());
        }
        if self.label_for(name).is_some() || is_hex_color(name) {
            return Some(name.to_string());
        }
        None
    }

    /// Like [`Palette::resolve`] but fails with `UnknownColor`.
    pub fn require(&self, name: &str) -> Result<String, SettingsError> {
        self.resolve(name)
            .ok_or_else(|| SettingsError::UnknownColor(name.to_string()))
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
