//! Turning a height grid into colored map rectangles.
//!
//! A raw tile has up to 3601 x 3601 samples, far too many rectangles to
//! redraw on every pan or zoom. The rasterizer walks the grid with a stride of
//! `size / 50`, so a tile becomes roughly 50 x 50 macro-cells whatever its
//! resolution, and drops every macro-cell outside the visible viewport.
//! Each macro-cell takes its color from its south-west sample; there is no
//! averaging.

use crate::notice::{Notice, NoticeCallback};
use crate::{ColorRamp, Rgb};
use hgtview_grid::{GeoBounds, GridError, HeightGrid};
use serde::Serialize;
use tracing::debug;

/// Macro-cells per side the rasterizer aims for.
pub const TARGET_CELLS_PER_SIDE: usize = 50;

/// Fill opacity used when the alpha setting is on.
pub const ALPHA_OPACITY: f64 = 0.5;

/// One colored rectangle for the map to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterCell {
    /// Geographic extent of the macro-cell.
    pub bounds: GeoBounds,
    /// Fill and stroke color.
    pub color: Rgb,
    /// Fill opacity, 0.5 with alpha on and 1.0 otherwise.
    pub opacity: f64,
    /// Representative elevation sample in meters.
    pub height: i16,
}

/// Output of one rasterization pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raster {
    /// Visible macro-cells in row-major order, south to north.
    pub cells: Vec<RasterCell>,
    /// Extent of the whole grid, for the map to fit its view to.
    pub fit_bounds: GeoBounds,
}

/// Coarsening step for a grid of `size` samples per side.
pub fn stride_for(size: usize) -> usize {
    (size / TARGET_CELLS_PER_SIDE).max(1)
}

/// Normalized elevation of `height` between the grid's extremes.
///
/// Minimums below sea level are raised to 0 first, so ocean and sub-sea
/// samples share the lowest color. A zero-width range yields 0 instead of
/// dividing by zero.
pub fn elevation_pct(min: i16, max: i16, height: i16) -> f64 {
    let effective_min = min.max(0) as f64;
    let max = max as f64;
    if max == effective_min {
        return 0.0;
    }
    (height as f64 - effective_min) / (max - effective_min)
}

/// Rasterize the part of `grid` visible in `viewport`.
///
/// Grids that are not SRTM-3 or SRTM-1 produce `UnsupportedGridFormat` and no
/// cells.
pub fn rasterize(grid: &HeightGrid, ramp: &ColorRamp, viewport: &GeoBounds, use_alpha: bool) -> Result<Raster, GridError> {
    let resolution = grid.resolution()?;
    let size = resolution.size();
    let stride = stride_for(size);
    let span = grid.cell_span();
    let cell_extent = stride as f64 * span;

    let south = grid.lower_right().lat;
    let west = grid.upper_left().lon;
    let opacity = if use_alpha { ALPHA_OPACITY } else { 1.0 };

    let mut cells = Vec::new();
    let mut culled = 0usize;

    for i in (0..size - stride).step_by(stride) {
        let lat_start = south + i as f64 * span;
        for j in (0..size - stride).step_by(stride) {
            let lon_start = west + j as f64 * span;
            let bounds = GeoBounds {
                min_lat: lat_start,
                max_lat: lat_start + cell_extent,
                min_lon: lon_start,
                max_lon: lon_start + cell_extent,
            };

            if !viewport.overlaps(&bounds) {
                culled += 1;
                continue;
            }

            let height = grid.sample(i, j).unwrap_or_default();
            let pct = elevation_pct(grid.min(), grid.max(), height);
            cells.push(RasterCell {
                bounds,
                color: ramp.color_at(pct),
                opacity,
                height,
            });
        }
    }

    debug!(
        ?resolution,
        stride,
        emitted = cells.len(),
        culled,
        "rasterized height grid"
    );

    Ok(Raster {
        cells,
        fit_bounds: grid.extent(),
    })
}

/// Like [`rasterize`], but reports failures through `callback` instead of
/// returning them. `None` means nothing should be drawn for this grid; the
/// base map keeps rendering either way.
pub fn rasterize_with_callback(
    grid: &HeightGrid,
    ramp: &ColorRamp,
    viewport: &GeoBounds,
    use_alpha: bool,
    callback: Option<&NoticeCallback>,
) -> Option<Raster> {
    match rasterize(grid, ramp, viewport, use_alpha) {
        Ok(raster) => Some(raster),
        Err(err) => {
            debug!(error = %err, "skipping rasterization");
            if let (Some(cb), Some(notice)) = (callback, Notice::from_grid_error(&err)) {
                cb(&notice);
            }
            None
        }
    }
}
