//! Error types for the grid crate.

use thiserror::Error;

/// Errors that can occur when working with height grids.
#[derive(Debug, Error)]
pub enum GridError {
    /// Grid resolution is neither SRTM-3 (1201) nor SRTM-1 (3601).
    #[error("Wrong SRTM-File format. (grid size {size}, expected 1201 or 3601)")]
    UnsupportedGridFormat {
        /// Samples per side reported by the decoder.
        size: usize,
    },

    /// Coordinate is outside the sampled area of the tile.
    #[error("Coordinate ({lat}, {lon}) is outside grid bounds ({min_lat}-{max_lat}, {min_lon}-{max_lon})")]
    OutOfBounds {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
        /// Grid minimum latitude.
        min_lat: f64,
        /// Grid maximum latitude.
        max_lat: f64,
        /// Grid minimum longitude.
        min_lon: f64,
        /// Grid maximum longitude.
        max_lon: f64,
    },

    /// Upper-left corner is not north-west of the lower-right corner.
    #[error("Invalid grid extent: upper-left ({ul_lat}, {ul_lon}) is not north-west of lower-right ({lr_lat}, {lr_lon})")]
    InvalidExtent {
        /// Upper-left latitude.
        ul_lat: f64,
        /// Upper-left longitude.
        ul_lon: f64,
        /// Lower-right latitude.
        lr_lat: f64,
        /// Lower-right longitude.
        lr_lon: f64,
    },

    /// Sample buffer does not hold `size * size` values.
    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch {
        /// Expected number of samples.
        expected: usize,
        /// Number of samples provided.
        actual: usize,
    },

    /// `size * size` samples would not fit in memory.
    #[error("Grid size {size} is too large")]
    GridTooLarge {
        /// Samples per side reported by the decoder.
        size: usize,
    },

    /// Grid has no samples per side.
    #[error("Grid size must be positive")]
    EmptyGrid,

    /// Tile name does not follow the `N49W001.hgt` convention.
    #[error("Invalid tile name: {0}")]
    InvalidTileName(String),
}
