//! User-facing notices raised while rendering.
//!
//! The renderer never talks to a notification widget directly. Callers pass
//! a [`NoticeCallback`] into the rendering boundary and decide themselves how
//! to show what comes out of it.

use hgtview_grid::GridError;
use serde::Serialize;

/// An error message for the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Short title.
    pub summary: String,
    /// Detail text.
    pub detail: String,
}

/// Detail text shown when a grid is neither SRTM-3 nor SRTM-1.
pub const WRONG_FORMAT_DETAIL: &str = "Wrong SRTM-File format.";

impl Notice {
    /// Notice for a grid whose size is not a supported SRTM resolution.
    pub fn wrong_format() -> Self {
        Self {
            summary: "Error Message".to_string(),
            detail: WRONG_FORMAT_DETAIL.to_string(),
        }
    }

    /// Map a grid error to the notice the user should see, if any.
    ///
    /// Out-of-bounds lookups are routine while the pointer moves around and
    /// produce no notice.
    pub fn from_grid_error(err: &GridError) -> Option<Self> {
        match err {
            GridError::UnsupportedGridFormat { .. } => Some(Self::wrong_format()),
            GridError::OutOfBounds { .. } => None,
            other => Some(Self {
                summary: "Error Message".to_string(),
                detail: other.to_string(),
            }),
        }
    }
}

/// Callback receiving notices, e.g. to show a toast.
pub type NoticeCallback = Box<dyn Fn(&Notice) + Send + Sync>;
