//! Status-line text for the pointer position.

use hgtview_grid::{height_at, tile_name, HeightGrid};
use serde::Serialize;
use std::fmt;

/// Resolution prefix for the status line, empty without a supported grid.
pub fn resolution_label(grid: Option<&HeightGrid>) -> &'static str {
    grid.and_then(|g| g.resolution().ok())
        .map(|r| r.label())
        .unwrap_or("")
}

/// Elevation under the pointer, only for supported grids.
pub fn pointer_height(grid: Option<&HeightGrid>, lat: f64, lon: f64) -> Option<i16> {
    let grid = grid.filter(|g| g.is_supported())?;
    height_at(grid, lat, lon)
}

/// `" | {height} m"`, or empty when no height is available.
pub fn height_text(height: Option<i16>) -> String {
    height.map(|h| format!(" | {} m", h)).unwrap_or_default()
}

/// Everything shown in the status bar for one pointer position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusLine {
    /// Pointer latitude.
    pub lat: f64,
    /// Pointer longitude.
    pub lon: f64,
    /// `"SRTM-3 | "`, `"SRTM-1 | "` or empty.
    pub resolution_label: &'static str,
    /// Tile identifier for the pointer position.
    pub tile_name: String,
    /// Sampled elevation in meters.
    pub height: Option<i16>,
}

impl StatusLine {
    /// Build the status line for a pointer position.
    pub fn new(grid: Option<&HeightGrid>, lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            resolution_label: resolution_label(grid),
            tile_name: tile_name(lat, lon),
            height: pointer_height(grid, lat, lon),
        }
    }

    /// Left half: the coordinates.
    pub fn position_text(&self) -> String {
        format!("Latitude: {:.6} Longitude: {:.6}", self.lat, self.lon)
    }

    /// Right half: resolution, tile and height.
    pub fn tile_text(&self) -> String {
        format!("{}{}{}", self.resolution_label, self.tile_name, height_text(self.height))
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position_text(), self.tile_text())
    }
}
