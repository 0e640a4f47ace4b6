//! Mapping geographic coordinates onto grid cells.
//!
//! A grid is assumed to span exactly one whole-degree tile, so the cell for a
//! point only depends on the fractional part of its coordinates. Points must
//! lie strictly inside the tile, with one sample of margin kept free at the
//! northern and eastern edges.

use crate::{GridError, HeightGrid, Result};
use tracing::trace;

/// Row and column of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// Row, growing northward.
    pub row: usize,
    /// Column, growing eastward.
    pub col: usize,
}

/// Check whether a point can be looked up in the grid.
pub fn in_bounds(grid: &HeightGrid, lat: f64, lon: f64) -> bool {
    let span = grid.cell_span();
    let ul = grid.upper_left();
    let lr = grid.lower_right();

    lat > lr.lat && lat + span < ul.lat && lon > ul.lon && lon + span < lr.lon
}

/// Locate the cell containing `(lat, lon)`.
pub fn cell_index(grid: &HeightGrid, lat: f64, lon: f64) -> Result<CellIndex> {
    if !in_bounds(grid, lat, lon) {
        let extent = grid.extent();
        return Err(GridError::OutOfBounds {
            lat,
            lon,
            min_lat: extent.min_lat,
            max_lat: extent.max_lat,
            min_lon: extent.min_lon,
            max_lon: extent.max_lon,
        });
    }

    let size = grid.size() as f64;
    let row = (size * (lat - lat.floor())).floor() as usize;
    let col = (size * (lon - lon.floor())).floor() as usize;

    // The margin check keeps both indices below `size`; clamp anyway so a
    // grid whose corners are not whole degrees cannot index past the edge.
    let last = grid.size() - 1;
    Ok(CellIndex {
        row: row.min(last),
        col: col.min(last),
    })
}

/// Raw elevation sample under `(lat, lon)`, or `None` when the point is off
/// the grid.
pub fn height_at(grid: &HeightGrid, lat: f64, lon: f64) -> Option<i16> {
    let index = cell_index(grid, lat, lon).ok()?;
    let height = grid.sample(index.row, index.col);
    trace!(lat, lon, row = index.row, col = index.col, ?height, "height lookup");
    height
}
