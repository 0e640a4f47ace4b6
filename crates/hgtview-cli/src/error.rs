//! Error types for the command-line front end.

use hgtview_grid::GridError;
use hgtview_render::RenderError;
use thiserror::Error;

/// Errors reported by `hgtview` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid JSON could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings or ramp problem.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Grid problem.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Viewport argument is not `south,west,north,east`.
    #[error("Invalid viewport '{0}': expected four comma-separated degrees south,west,north,east")]
    InvalidViewport(String),
}
