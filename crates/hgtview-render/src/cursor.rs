//! Pointer-driven overlays: the highlighted cell and the position marker.

use hgtview_grid::{cell_index, GeoBounds, GeoPoint, HeightGrid};
use serde::{Deserialize, Serialize};

/// Half-length of the marker's horizontal stroke, in degrees of longitude.
pub const MARKER_HALF_WIDTH: f64 = 0.05;

/// Half-length of the marker's vertical stroke, in degrees of latitude.
pub const MARKER_HALF_HEIGHT: f64 = 0.03;

/// Rectangle of the single grid cell under `(lat, lon)`.
///
/// Returns [`GeoBounds::DEGENERATE`] when there is no grid or the point is
/// off the grid.
pub fn cell_rect(grid: Option<&HeightGrid>, lat: f64, lon: f64) -> GeoBounds {
    let Some(grid) = grid else {
        return GeoBounds::DEGENERATE;
    };
    let Ok(index) = cell_index(grid, lat, lon) else {
        return GeoBounds::DEGENERATE;
    };

    let span = grid.cell_span();
    let lat_start = lat.floor() + index.row as f64 * span;
    let lon_start = lon.floor() + index.col as f64 * span;

    GeoBounds {
        min_lat: lat_start,
        max_lat: lat_start + span,
        min_lon: lon_start,
        max_lon: lon_start + span,
    }
}

/// A user-placed position marker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    /// Latitude of the marker.
    pub lat: f64,
    /// Longitude of the marker.
    pub lon: f64,
    /// Whether the marker is drawn.
    #[serde(default)]
    pub show: bool,
}

/// Two line segments crossing at a marked position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crosshair {
    /// West-to-east segment.
    pub horizontal: [GeoPoint; 2],
    /// South-to-north segment.
    pub vertical: [GeoPoint; 2],
}

/// Crosshair centered on `(lat, lon)`.
pub fn crosshair(lat: f64, lon: f64) -> Crosshair {
    Crosshair {
        horizontal: [
            GeoPoint::new(lat, lon - MARKER_HALF_WIDTH),
            GeoPoint::new(lat, lon + MARKER_HALF_WIDTH),
        ],
        vertical: [
            GeoPoint::new(lat - MARKER_HALF_HEIGHT, lon),
            GeoPoint::new(lat + MARKER_HALF_HEIGHT, lon),
        ],
    }
}

impl Marker {
    /// Crosshair for this marker, if it is shown.
    pub fn crosshair(&self) -> Option<Crosshair> {
        self.show.then(|| crosshair(self.lat, self.lon))
    }
}
