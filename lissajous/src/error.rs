//! Error types.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error]`
//! attributes, and `#[from]` lets `?` convert a lower-level error into ours.

use thiserror::Error;

/// Error raised by the curve generator.
///
/// The generator has exactly one failure mode: malformed input. Nothing is
/// produced when it fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl CurveError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CurveError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Error raised while loading or checking settings and palettes.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse palette JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}
