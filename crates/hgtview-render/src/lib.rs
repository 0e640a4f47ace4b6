//! # hgtview-render
//!
//! Rendering geometry for an SRTM elevation overlay on an interactive map.
//!
//! This crate turns a decoded [`HeightGrid`](hgtview_grid::HeightGrid) into
//! things a map widget can draw:
//! - colored rectangles for the visible part of the tile ([`rasterize`])
//! - a one-cell highlight under the pointer ([`cell_rect`])
//! - the status-line text for the pointer position ([`StatusLine`])
//!
//! It draws nothing itself and has no notion of tiles, canvases or layers.
//! [`Viewer`] ties the pieces together for an event-driven front end.
//!
//! ## Example
//!
//! ```
//! use hgtview_grid::{GeoBounds, GeoPoint, HeightGrid};
//! use hgtview_render::{Viewer, ViewerState};
//!
//! let rect = [GeoPoint::new(50.0, 10.0), GeoPoint::new(49.0, 11.0)];
//! let grid = HeightGrid::from_samples(rect, 1201, vec![120; 1201 * 1201])?;
//!
//! let mut viewer = Viewer::new();
//! assert_eq!(viewer.load_grid(grid), ViewerState::Loaded);
//!
//! let frame = viewer.render(&GeoBounds::unbounded());
//! assert_eq!(frame.cells.len(), 50 * 50);
//!
//! let readout = viewer.pointer_moved(49.5, 10.5);
//! assert_eq!(readout.status.tile_text(), "SRTM-3 | N49E010.hgt | 120 m");
//! # Ok::<(), hgtview_render::RenderError>(())
//! ```

mod color;
mod cursor;
mod error;
mod notice;
mod rasterize;
mod settings;
mod status;
mod viewer;

pub use color::{default_stops, ColorRamp, ColorStop, Rgb};
pub use cursor::{cell_rect, crosshair, Crosshair, Marker, MARKER_HALF_HEIGHT, MARKER_HALF_WIDTH};
pub use error::RenderError;
pub use notice::{Notice, NoticeCallback, WRONG_FORMAT_DETAIL};
pub use rasterize::{
    elevation_pct, rasterize, rasterize_with_callback, stride_for, Raster, RasterCell, ALPHA_OPACITY,
    TARGET_CELLS_PER_SIDE,
};
pub use settings::ViewerSettings;
pub use status::{height_text, pointer_height, resolution_label, StatusLine};
pub use viewer::{Frame, PointerReadout, Viewer, ViewerState};

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
