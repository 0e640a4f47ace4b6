//! Geographic points and axis-aligned bounds.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Serialized as a `[lat, lon]` pair, which is what the map widget and the
/// grid decoder exchange.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    /// Latitude (positive = north).
    pub lat: f64,
    /// Longitude (positive = east).
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

/// Geographic bounds of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimum latitude (south edge).
    pub min_lat: f64,
    /// Maximum latitude (north edge).
    pub max_lat: f64,
    /// Minimum longitude (west edge).
    pub min_lon: f64,
    /// Maximum longitude (east edge).
    pub max_lon: f64,
}

impl GeoBounds {
    /// Zero-area bounds at the origin, used when there is nothing to draw.
    pub const DEGENERATE: GeoBounds = GeoBounds {
        min_lat: 0.0,
        max_lat: 0.0,
        min_lon: 0.0,
        max_lon: 0.0,
    };

    /// Build bounds from any two opposite corners.
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            min_lat: a.lat.min(b.lat),
            max_lat: a.lat.max(b.lat),
            min_lon: a.lon.min(b.lon),
            max_lon: a.lon.max(b.lon),
        }
    }

    /// Bounds covering the whole globe.
    pub fn unbounded() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        }
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lon)
    }

    /// Check if a coordinate is within the bounds (edges included).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Check whether two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &GeoBounds) -> bool {
        other.max_lat > self.min_lat
            && other.min_lat < self.max_lat
            && other.max_lon > self.min_lon
            && other.min_lon < self.max_lon
    }

    /// True if the rectangle has zero area.
    pub fn is_degenerate(&self) -> bool {
        self.max_lat <= self.min_lat || self.max_lon <= self.min_lon
    }
}
