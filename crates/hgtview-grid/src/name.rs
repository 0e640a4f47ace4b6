//! SRTM tile identifiers such as `N49W001.hgt`.

use crate::bounds::GeoBounds;
use crate::{GridError, Result};

/// Tile identifier for a coordinate.
///
/// The hemisphere letter follows the sign of `floor(coord)`; the magnitude is
/// `floor(|coord|)`, zero padded to two digits for latitude and three for
/// longitude.
///
/// ```
/// use hgtview_grid::tile_name;
///
/// assert_eq!(tile_name(49.7, -1.3), "N49W001.hgt");
/// assert_eq!(tile_name(-5.9, 120.4), "S05E120.hgt");
/// ```
pub fn tile_name(lat: f64, lon: f64) -> String {
    let lat_hemi = if lat.floor() >= 0.0 { 'N' } else { 'S' };
    let lon_hemi = if lon.floor() >= 0.0 { 'E' } else { 'W' };
    let lat_deg = lat.abs().floor() as u32;
    let lon_deg = lon.abs().floor() as u32;

    format!("{}{:02}{}{:03}.hgt", lat_hemi, lat_deg, lon_hemi, lon_deg)
}

/// Bounds of the one-degree tile a file name refers to.
///
/// The name encodes the tile's south-west corner. Letters are case
/// insensitive and the `.hgt` suffix is optional, so `n48w123` and
/// `N48W123.hgt` are the same tile covering 48..49 N, 123..122 W.
pub fn parse_tile_name(name: &str) -> Result<GeoBounds> {
    let invalid = || GridError::InvalidTileName(name.to_string());

    let upper = name.trim().to_ascii_uppercase();
    let stem = upper.strip_suffix(".HGT").unwrap_or(&upper);
    if stem.len() != 7 || !stem.is_ascii() {
        return Err(invalid());
    }

    let (lat_part, lon_part) = stem.split_at(3);
    let lat_sign = match lat_part.as_bytes()[0] {
        b'N' => 1.0,
        b'S' => -1.0,
        _ => return Err(invalid()),
    };
    let lon_sign = match lon_part.as_bytes()[0] {
        b'E' => 1.0,
        b'W' => -1.0,
        _ => return Err(invalid()),
    };

    let lat_digits = &lat_part[1..];
    let lon_digits = &lon_part[1..];
    if !lat_digits.bytes().all(|b| b.is_ascii_digit()) || !lon_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let lat: f64 = lat_digits.parse().map_err(|_| invalid())?;
    let lon: f64 = lon_digits.parse().map_err(|_| invalid())?;

    // South-west corners run from S90 to N89 and from W180 to E179.
    let min_lat = lat_sign * lat;
    let min_lon = lon_sign * lon;
    if !(-90.0..90.0).contains(&min_lat) || !(-180.0..180.0).contains(&min_lon) {
        return Err(invalid());
    }
    Ok(GeoBounds {
        min_lat,
        max_lat: min_lat + 1.0,
        min_lon,
        max_lon: min_lon + 1.0,
    })
}
