//! # hgtview-grid
//!
//! Decoded SRTM height grids and the geographic lookups built on them.
//!
//! ## Overview
//!
//! SRTM elevation data comes in one-degree tiles at two resolutions:
//! - SRTM-3: 1201 x 1201 samples, 3 arc-second (~90 meters) spacing
//! - SRTM-1: 3601 x 3601 samples, 1 arc-second (~30 meters) spacing
//!
//! Tiles are named after their south-west corner, like `N49W001.hgt`.
//!
//! This crate does not read `.hgt` bytes. A decoder hands over an already
//! decoded [`HeightGrid`] (directly or as JSON), and this crate answers:
//! - which tile a coordinate belongs to ([`tile_name`])
//! - which grid cell a coordinate falls in ([`cell_index`])
//! - what the elevation is there ([`height_at`])
//!
//! ## Example
//!
//! ```
//! use hgtview_grid::{height_at, tile_name, GeoPoint, HeightGrid};
//!
//! let rect = [GeoPoint::new(50.0, 10.0), GeoPoint::new(49.0, 11.0)];
//! let grid = HeightGrid::from_samples(rect, 1201, vec![250; 1201 * 1201])?;
//!
//! assert_eq!(tile_name(49.5, 10.5), "N49E010.hgt");
//! assert_eq!(height_at(&grid, 49.5, 10.5), Some(250));
//! assert_eq!(height_at(&grid, 40.0, 10.5), None);
//! # Ok::<(), hgtview_grid::GridError>(())
//! ```

mod bounds;
mod error;
mod grid;
mod locate;
mod name;

pub use bounds::{GeoBounds, GeoPoint};
pub use error::GridError;
pub use grid::{HeightGrid, Resolution, SRTM1_SIZE, SRTM3_SIZE, VOID_VALUE};
pub use locate::{cell_index, height_at, in_bounds, CellIndex};
pub use name::{parse_tile_name, tile_name};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
