//! Error types for the render crate.

use hgtview_grid::GridError;
use thiserror::Error;

/// Errors that can occur while building ramps, loading settings or rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Color stops do not form a usable ramp.
    #[error("Invalid color ramp: {0}")]
    InvalidRamp(String),

    /// A color string is not six hex digits.
    #[error("Invalid color '{0}': expected six hex digits like 'ADFF2F'")]
    InvalidColor(String),

    /// I/O error reading a settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML settings could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Grid-level failure, such as an unsupported format.
    #[error(transparent)]
    Grid(#[from] GridError),
}
