//! Viewer state shared between map events.
//!
//! The map widget forwards two kinds of events: viewport changes, which call
//! [`Viewer::render`], and pointer moves, which call
//! [`Viewer::pointer_moved`]. Both read an immutable snapshot of the current
//! grid and ramp. Loading a file or editing colors swaps in a new snapshot;
//! nothing is mutated while a frame is being computed.

use crate::cursor::{cell_rect, Crosshair, Marker};
use crate::notice::{Notice, NoticeCallback};
use crate::rasterize::{rasterize_with_callback, RasterCell};
use crate::status::StatusLine;
use crate::{ColorRamp, Result, ViewerSettings};
use hgtview_grid::{GeoBounds, HeightGrid};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether a grid is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewerState {
    /// No grid; only the base map is drawn.
    Empty,
    /// A grid from the decoder is loaded.
    Loaded,
}

/// Everything to draw for one viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Colored macro-cells overlapping the viewport.
    pub cells: Vec<RasterCell>,
    /// Grid extent the map should fit to, if a displayable grid is loaded.
    pub fit_bounds: Option<GeoBounds>,
    /// Marker crosshair, if a marker is shown.
    pub crosshair: Option<Crosshair>,
}

/// Result of a pointer move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerReadout {
    /// Status-line contents.
    pub status: StatusLine,
    /// Cell under the pointer, degenerate when there is none.
    pub highlight: GeoBounds,
}

/// Holds the loaded grid and display settings for the map.
pub struct Viewer {
    grid: Option<Arc<HeightGrid>>,
    ramp: Arc<ColorRamp>,
    use_alpha: bool,
    marker: Option<Marker>,
    notifier: Option<NoticeCallback>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewer")
            .field("state", &self.state())
            .field("grid_size", &self.grid.as_ref().map(|g| g.size()))
            .field("stops", &self.ramp.stops().len())
            .field("use_alpha", &self.use_alpha)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

impl Viewer {
    /// Create an empty viewer with the default ramp.
    pub fn new() -> Self {
        Self {
            grid: None,
            ramp: Arc::new(ColorRamp::default()),
            use_alpha: false,
            marker: None,
            notifier: None,
        }
    }

    /// Create an empty viewer from settings.
    pub fn with_settings(settings: &ViewerSettings) -> Result<Self> {
        let mut viewer = Self::new();
        viewer.apply_settings(settings)?;
        Ok(viewer)
    }

    /// Route notices (such as an unsupported file format) to `callback`.
    pub fn set_notifier(&mut self, callback: NoticeCallback) {
        self.notifier = Some(callback);
    }

    /// Current state.
    pub fn state(&self) -> ViewerState {
        if self.grid.is_some() {
            ViewerState::Loaded
        } else {
            ViewerState::Empty
        }
    }

    /// The loaded grid.
    pub fn grid(&self) -> Option<&Arc<HeightGrid>> {
        self.grid.as_ref()
    }

    /// The active color ramp.
    pub fn ramp(&self) -> &Arc<ColorRamp> {
        &self.ramp
    }

    /// Whether cells are drawn half transparent.
    pub fn use_alpha(&self) -> bool {
        self.use_alpha
    }

    /// Replace the grid with a newly decoded one.
    ///
    /// Unsupported grids are kept (the viewer is `Loaded`) but never drawn,
    /// and the notifier receives a wrong-format notice.
    pub fn load_grid(&mut self, grid: impl Into<Arc<HeightGrid>>) -> ViewerState {
        let grid = grid.into();
        match grid.resolution() {
            Ok(resolution) => {
                debug!(
                    ?resolution,
                    arc_seconds = resolution.arc_seconds(),
                    extent = ?grid.extent(),
                    "loaded height grid"
                );
            }
            Err(err) => {
                warn!(size = grid.size(), "loaded grid has an unsupported format");
                if let Some(notice) = Notice::from_grid_error(&err) {
                    self.notify(&notice);
                }
            }
        }
        self.grid = Some(grid);
        self.state()
    }

    /// Drop the grid.
    pub fn clear(&mut self) -> ViewerState {
        if self.grid.take().is_some() {
            debug!("cleared height grid");
        }
        self.state()
    }

    /// Swap in a new color ramp.
    pub fn set_ramp(&mut self, ramp: impl Into<Arc<ColorRamp>>) {
        self.ramp = ramp.into();
    }

    /// Toggle half-transparent cells.
    pub fn set_alpha(&mut self, use_alpha: bool) {
        self.use_alpha = use_alpha;
    }

    /// Set or remove the position marker.
    pub fn set_marker(&mut self, marker: Option<Marker>) {
        self.marker = marker;
    }

    /// Apply settings. On an invalid ramp nothing changes.
    pub fn apply_settings(&mut self, settings: &ViewerSettings) -> Result<()> {
        let ramp = settings.to_ramp()?;
        self.set_ramp(ramp);
        self.use_alpha = settings.alpha;
        self.marker = settings.marker;
        Ok(())
    }

    /// Compute the frame for the visible `viewport`.
    pub fn render(&self, viewport: &GeoBounds) -> Frame {
        let crosshair = self.marker.and_then(|m| m.crosshair());

        // Unsupported grids were already reported by `load_grid`.
        let raster = self
            .grid
            .as_deref()
            .and_then(|grid| rasterize_with_callback(grid, &self.ramp, viewport, self.use_alpha, None));

        match raster {
            Some(raster) => Frame {
                cells: raster.cells,
                fit_bounds: Some(raster.fit_bounds),
                crosshair,
            },
            None => Frame {
                cells: Vec::new(),
                fit_bounds: None,
                crosshair,
            },
        }
    }

    /// Status line and highlight for the pointer at `(lat, lon)`.
    pub fn pointer_moved(&self, lat: f64, lon: f64) -> PointerReadout {
        let grid = self.grid.as_deref();
        let drawable = grid.filter(|g| g.is_supported());

        PointerReadout {
            status: StatusLine::new(grid, lat, lon),
            highlight: cell_rect(drawable, lat, lon),
        }
    }

    fn notify(&self, notice: &Notice) {
        if let Some(cb) = &self.notifier {
            cb(notice);
        }
    }
}
