//! Integration tests for hgtview-grid using decoder-shaped JSON grids.

use hgtview_grid::{
    cell_index, height_at, in_bounds, parse_tile_name, tile_name, GeoPoint, GridError, HeightGrid, Resolution,
};

/// Build the JSON a decoder would emit for an SRTM-3 tile whose samples
/// encode their own row and column.
fn decoder_json(ul: (f64, f64), lr: (f64, f64), size: usize) -> String {
    let rows: Vec<Vec<i16>> = (0..size)
        .map(|row| (0..size).map(|col| ((row * 7 + col) % 4000) as i16).collect())
        .collect();
    serde_json::json!({
        "rect": [[ul.0, ul.1], [lr.0, lr.1]],
        "size": size,
        "min": 0,
        "max": 3999,
        "srtm": rows,
    })
    .to_string()
}

#[test]
fn test_decode_and_lookup_northern_tile() {
    let json = decoder_json((50.0, 10.0), (49.0, 11.0), 1201);
    let grid: HeightGrid = serde_json::from_str(&json).expect("Failed to decode grid");

    assert_eq!(grid.resolution().unwrap(), Resolution::Srtm3);
    assert_eq!(grid.rect(), [GeoPoint::new(50.0, 10.0), GeoPoint::new(49.0, 11.0)]);

    let lat = 49.75;
    let lon = 10.1;
    let index = cell_index(&grid, lat, lon).expect("Point should be on the grid");
    assert_eq!(index.row, 900);
    assert_eq!(index.col, 120);
    assert_eq!(height_at(&grid, lat, lon), Some(((900 * 7 + 120) % 4000) as i16));

    let tile = tile_name(lat, lon);
    assert_eq!(tile, "N49E010.hgt");
    let bounds = parse_tile_name(&tile).unwrap();
    assert!(bounds.contains(lat, lon));
    assert_eq!(bounds, grid.extent());
}

#[test]
fn test_lookup_western_tile() {
    let json = decoder_json((50.0, -2.0), (49.0, -1.0), 1201);
    let grid: HeightGrid = serde_json::from_str(&json).unwrap();

    // floor(-1.3) = -2, so the fraction is 0.7.
    let index = cell_index(&grid, 49.7, -1.3).unwrap();
    assert_eq!(index.col, (1201.0 * 0.7_f64).floor() as usize);
    assert!(height_at(&grid, 49.7, -1.3).is_some());
}

#[test]
fn test_every_in_bounds_point_indexes_inside_grid() {
    for &size in &[1201usize, 3601] {
        let grid = HeightGrid::new(
            [GeoPoint::new(-4.0, 120.0), GeoPoint::new(-5.0, 121.0)],
            size,
            0,
            0,
            vec![0; size * size],
        )
        .unwrap();

        let steps = 97;
        for a in 0..=steps {
            for b in 0..=steps {
                let lat = -5.0 + a as f64 / steps as f64;
                let lon = 120.0 + b as f64 / steps as f64;
                match cell_index(&grid, lat, lon) {
                    Ok(index) => {
                        assert!(in_bounds(&grid, lat, lon));
                        assert!(index.row < size && index.col < size);
                        assert!(grid.sample(index.row, index.col).is_some());
                    }
                    Err(GridError::OutOfBounds { .. }) => assert!(!in_bounds(&grid, lat, lon)),
                    Err(other) => panic!("unexpected error: {}", other),
                }
            }
        }
    }
}

#[test]
fn test_unsupported_size_reports_format_error() {
    let json = decoder_json((50.0, 10.0), (49.0, 11.0), 90);
    let grid: HeightGrid = serde_json::from_str(&json).unwrap();

    let err = grid.resolution().unwrap_err();
    assert!(matches!(err, GridError::UnsupportedGridFormat { size: 90 }));
    assert!(err.to_string().starts_with("Wrong SRTM-File format."));
}
