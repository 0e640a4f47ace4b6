//! Decoded SRTM height grid.

use crate::bounds::{GeoBounds, GeoPoint};
use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Samples per side of an SRTM-3 (3 arc-second) tile.
pub const SRTM3_SIZE: usize = 1201;

/// Samples per side of an SRTM-1 (1 arc-second) tile.
pub const SRTM1_SIZE: usize = 3601;

/// Sample value SRTM uses to mark voids.
pub const VOID_VALUE: i16 = -32768;

/// Resolution class of a grid, derived from its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 1201 x 1201 samples, ~90 m spacing.
    Srtm3,
    /// 3601 x 3601 samples, ~30 m spacing.
    Srtm1,
}

impl Resolution {
    /// Classify a grid size. Any size other than 1201 or 3601 is unsupported.
    pub fn from_size(size: usize) -> Result<Self> {
        match size {
            SRTM3_SIZE => Ok(Resolution::Srtm3),
            SRTM1_SIZE => Ok(Resolution::Srtm1),
            _ => Err(GridError::UnsupportedGridFormat { size }),
        }
    }

    /// Samples per side.
    pub fn size(self) -> usize {
        match self {
            Resolution::Srtm3 => SRTM3_SIZE,
            Resolution::Srtm1 => SRTM1_SIZE,
        }
    }

    /// Sample spacing in arc-seconds.
    pub fn arc_seconds(self) -> u32 {
        match self {
            Resolution::Srtm3 => 3,
            Resolution::Srtm1 => 1,
        }
    }

    /// Prefix shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Srtm3 => "SRTM-3 | ",
            Resolution::Srtm1 => "SRTM-1 | ",
        }
    }
}

/// An immutable grid of elevation samples covering one whole-degree tile.
///
/// Samples are stored row-major. Row index grows with latitude inside the
/// tile and column index grows with longitude, so `sample(0, 0)` is the
/// south-west corner. Swapping this orientation mirrors the rendered terrain.
///
/// A grid is never edited after construction; loading another file replaces
/// it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HeightGridRecord", into = "HeightGridRecord")]
pub struct HeightGrid {
    /// North-west corner.
    upper_left: GeoPoint,
    /// South-east corner.
    lower_right: GeoPoint,
    /// Samples per side.
    size: usize,
    /// Lowest elevation in meters.
    min: i16,
    /// Highest elevation in meters.
    max: i16,
    /// `size * size` samples in row-major order.
    samples: Vec<i16>,
}

impl HeightGrid {
    /// Build a grid from a flat row-major sample buffer.
    ///
    /// `rect` is `[upper_left, lower_right]`. Any positive `size` is accepted
    /// here; use [`HeightGrid::resolution`] to find out whether it is a
    /// supported SRTM format.
    pub fn new(rect: [GeoPoint; 2], size: usize, min: i16, max: i16, samples: Vec<i16>) -> Result<Self> {
        let [upper_left, lower_right] = rect;

        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if !(upper_left.lat > lower_right.lat && upper_left.lon < lower_right.lon) {
            return Err(GridError::InvalidExtent {
                ul_lat: upper_left.lat,
                ul_lon: upper_left.lon,
                lr_lat: lower_right.lat,
                lr_lon: lower_right.lon,
            });
        }
        let expected = Self::sample_count(size)?;
        if samples.len() != expected {
            return Err(GridError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            upper_left,
            lower_right,
            size,
            min,
            max,
            samples,
        })
    }

    /// Build a grid from nested rows, as produced by the decoder.
    pub fn from_rows(rect: [GeoPoint; 2], size: usize, min: i16, max: i16, rows: Vec<Vec<i16>>) -> Result<Self> {
        if rows.len() != size {
            return Err(GridError::SampleCountMismatch {
                expected: size,
                actual: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(GridError::SampleCountMismatch {
                expected: size,
                actual: row.len(),
            });
        }

        let samples = rows.into_iter().flatten().collect();
        Self::new(rect, size, min, max, samples)
    }

    /// Number of samples in a grid with `size` samples per side.
    pub fn sample_count(size: usize) -> Result<usize> {
        size.checked_mul(size).ok_or(GridError::GridTooLarge { size })
    }

    /// Build a grid, taking `min` and `max` from the samples themselves.
    ///
    /// Void samples are ignored. A grid made only of voids gets `min = max = 0`.
    pub fn from_samples(rect: [GeoPoint; 2], size: usize, samples: Vec<i16>) -> Result<Self> {
        let (min, max) = samples
            .iter()
            .copied()
            .filter(|&v| v != VOID_VALUE)
            .fold(None, |acc: Option<(i16, i16)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })
            .unwrap_or((0, 0));
        Self::new(rect, size, min, max, samples)
    }

    /// Corners as `[upper_left, lower_right]`.
    pub fn rect(&self) -> [GeoPoint; 2] {
        [self.upper_left, self.lower_right]
    }

    /// North-west corner.
    pub fn upper_left(&self) -> GeoPoint {
        self.upper_left
    }

    /// South-east corner.
    pub fn lower_right(&self) -> GeoPoint {
        self.lower_right
    }

    /// Samples per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lowest elevation in meters.
    pub fn min(&self) -> i16 {
        self.min
    }

    /// Highest elevation in meters.
    pub fn max(&self) -> i16 {
        self.max
    }

    /// Geographic extent of the whole grid.
    pub fn extent(&self) -> GeoBounds {
        GeoBounds::from_corners(self.upper_left, self.lower_right)
    }

    /// Resolution class, or `UnsupportedGridFormat` for any other size.
    pub fn resolution(&self) -> Result<Resolution> {
        Resolution::from_size(self.size)
    }

    /// True for SRTM-3 and SRTM-1 grids.
    pub fn is_supported(&self) -> bool {
        self.resolution().is_ok()
    }

    /// Degrees spanned by a single sample.
    pub fn cell_span(&self) -> f64 {
        1.0 / self.size as f64
    }

    /// Raw sample at `(row, col)`, or `None` past the grid edge.
    pub fn sample(&self, row: usize, col: usize) -> Option<i16> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.samples.get(row * self.size + col).copied()
    }
}

/// Wire shape of a grid as emitted by the decoder.
#[derive(Serialize, Deserialize)]
struct HeightGridRecord {
    rect: [GeoPoint; 2],
    size: usize,
    min: i16,
    max: i16,
    srtm: Vec<Vec<i16>>,
}

impl TryFrom<HeightGridRecord> for HeightGrid {
    type Error = GridError;

    fn try_from(record: HeightGridRecord) -> Result<Self> {
        HeightGrid::from_rows(record.rect, record.size, record.min, record.max, record.srtm)
    }
}

impl From<HeightGrid> for HeightGridRecord {
    fn from(grid: HeightGrid) -> Self {
        let srtm = grid.samples.chunks(grid.size).map(<[i16]>::to_vec).collect();
        HeightGridRecord {
            rect: [grid.upper_left, grid.lower_right],
            size: grid.size,
            min: grid.min,
            max: grid.max,
            srtm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_rect() -> [GeoPoint; 2] {
        [GeoPoint::new(50.0, 10.0), GeoPoint::new(49.0, 11.0)]
    }

    #[test]
    fn test_resolution_from_size() {
        assert_eq!(Resolution::from_size(1201).unwrap(), Resolution::Srtm3);
        assert_eq!(Resolution::from_size(3601).unwrap(), Resolution::Srtm1);
        assert!(matches!(
            Resolution::from_size(90),
            Err(GridError::UnsupportedGridFormat { size: 90 })
        ));
        assert_eq!(Resolution::Srtm3.label(), "SRTM-3 | ");
        assert_eq!(Resolution::Srtm1.label(), "SRTM-1 | ");
        assert_eq!(Resolution::Srtm3.arc_seconds(), 3);
        assert_eq!(Resolution::Srtm1.arc_seconds(), 1);
    }

    #[test]
    fn test_new_rejects_bad_sample_count() {
        let err = HeightGrid::new(tile_rect(), 3, 0, 0, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            GridError::SampleCountMismatch { expected: 9, actual: 8 }
        ));
    }

    #[test]
    fn test_new_rejects_swapped_corners() {
        let rect = [GeoPoint::new(49.0, 11.0), GeoPoint::new(50.0, 10.0)];
        let err = HeightGrid::new(rect, 2, 0, 0, vec![0; 4]).unwrap_err();
        assert!(matches!(err, GridError::InvalidExtent { .. }));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let err = HeightGrid::new(tile_rect(), 0, 0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::EmptyGrid));
    }

    #[test]
    fn test_unsupported_size_is_constructible() {
        let grid = HeightGrid::new(tile_rect(), 90, 0, 0, vec![0; 90 * 90]).unwrap();
        assert!(!grid.is_supported());
        assert!(grid.resolution().is_err());
    }

    #[test]
    fn test_sample_orientation() {
        // Row 0 is the southern edge; column 0 the western edge.
        let grid = HeightGrid::from_rows(tile_rect(), 2, 1, 4, vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.sample(0, 0), Some(1));
        assert_eq!(grid.sample(0, 1), Some(2));
        assert_eq!(grid.sample(1, 0), Some(3));
        assert_eq!(grid.sample(2, 0), None);
        assert_eq!(grid.sample(0, 2), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = HeightGrid::from_rows(tile_rect(), 2, 0, 0, vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, GridError::SampleCountMismatch { expected: 2, actual: 1 }));

        let err = HeightGrid::from_rows(tile_rect(), 2, 0, 0, vec![vec![1, 2]]).unwrap_err();
        assert!(matches!(err, GridError::SampleCountMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let huge = 1usize << (usize::BITS / 2);
        assert!(matches!(HeightGrid::sample_count(huge), Err(GridError::GridTooLarge { .. })));
        assert_eq!(HeightGrid::sample_count(1201).unwrap(), 1201 * 1201);

        let err = HeightGrid::new(tile_rect(), huge, 0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::GridTooLarge { size } if size == huge));

        // Row count is checked before anything is allocated.
        let err = HeightGrid::from_rows(tile_rect(), usize::MAX, 0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::SampleCountMismatch { actual: 0, .. }));
    }

    #[test]
    fn test_decoder_json_rejects_huge_size() {
        let json = r#"{"rect": [[50.0, 10.0], [49.0, 11.0]], "size": 4294967296, "min": 0, "max": 0, "srtm": []}"#;
        assert!(serde_json::from_str::<HeightGrid>(json).is_err());
    }

    #[test]
    fn test_from_samples_ignores_voids() {
        let grid = HeightGrid::from_samples(tile_rect(), 2, vec![VOID_VALUE, -12, 340, 7]).unwrap();
        assert_eq!(grid.min(), -12);
        assert_eq!(grid.max(), 340);

        let voids = HeightGrid::from_samples(tile_rect(), 1, vec![VOID_VALUE]).unwrap();
        assert_eq!((voids.min(), voids.max()), (0, 0));
    }

    #[test]
    fn test_extent_and_span() {
        let grid = HeightGrid::new(tile_rect(), 2, 0, 0, vec![0; 4]).unwrap();
        let extent = grid.extent();
        assert_eq!(extent.min_lat, 49.0);
        assert_eq!(extent.max_lat, 50.0);
        assert_eq!(extent.min_lon, 10.0);
        assert_eq!(extent.max_lon, 11.0);
        assert_eq!(grid.cell_span(), 0.5);
    }

    #[test]
    fn test_decoder_json_shape() {
        let json = r#"{
            "rect": [[50.0, 10.0], [49.0, 11.0]],
            "size": 2,
            "min": -3,
            "max": 120,
            "srtm": [[-3, 5], [60, 120]]
        }"#;
        let grid: HeightGrid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.min(), -3);
        assert_eq!(grid.sample(1, 1), Some(120));

        let out = serde_json::to_value(&grid).unwrap();
        assert_eq!(out["srtm"][1][0], 60);
        assert_eq!(out["rect"][1][1], 11.0);
    }

    #[test]
    fn test_decoder_json_rejects_short_grid() {
        let json = r#"{"rect": [[50.0, 10.0], [49.0, 11.0]], "size": 2, "min": 0, "max": 0, "srtm": [[1, 2]]}"#;
        assert!(serde_json::from_str::<HeightGrid>(json).is_err());
    }
}
