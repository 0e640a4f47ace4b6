//! Synthetic height grids for demos and tests.

use hgtview_grid::{GeoPoint, GridError, HeightGrid, SRTM1_SIZE};

/// Peak elevation of the synthetic hill, in meters.
pub const SYNTH_PEAK_M: f64 = 2400.0;

/// Depth of the synthetic basin at the tile corners, in meters.
pub const SYNTH_BASIN_M: f64 = -40.0;

/// Build a grid for the tile containing `(lat, lon)`: a single hill centered
/// in the tile, sloping down to slightly below sea level at the corners.
///
/// Sizes above SRTM-1 are rejected with `GridTooLarge`.
pub fn synth_grid(lat: f64, lon: f64, size: usize) -> hgtview_grid::Result<HeightGrid> {
    if size > SRTM1_SIZE {
        return Err(GridError::GridTooLarge { size });
    }
    let count = HeightGrid::sample_count(size)?;

    let south = lat.floor();
    let west = lon.floor();
    let rect = [GeoPoint::new(south + 1.0, west), GeoPoint::new(south, west + 1.0)];

    let center = (size.saturating_sub(1)) as f64 / 2.0;
    let max_dist = (2.0 * center * center).sqrt().max(1.0);

    let samples = (0..count)
        .map(|i| {
            let dr = (i / size) as f64 - center;
            let dc = (i % size) as f64 - center;
            let t = (dr * dr + dc * dc).sqrt() / max_dist;
            let falloff = (t * std::f64::consts::FRAC_PI_2).cos();
            (SYNTH_BASIN_M + (SYNTH_PEAK_M - SYNTH_BASIN_M) * falloff).round() as i16
        })
        .collect();

    HeightGrid::from_samples(rect, size, samples)
}
