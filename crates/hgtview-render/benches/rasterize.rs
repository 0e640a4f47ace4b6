//! Rasterization benchmarks.
//!
//! Rasterization runs on every pan and zoom, so a full tile has to fit in a
//! single interactive frame at both SRTM resolutions.
//!
//! ## Running the benchmarks
//!
//! ```bash
//! cargo bench -p hgtview-render
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hgtview_grid::{GeoBounds, GeoPoint, HeightGrid, SRTM1_SIZE, SRTM3_SIZE};
use hgtview_render::{rasterize, ColorRamp, Viewer};

fn sloped_grid(size: usize) -> HeightGrid {
    let rect = [GeoPoint::new(50.0, 10.0), GeoPoint::new(49.0, 11.0)];
    let samples = (0..size * size)
        .map(|i| ((i / size + i % size) % 3000) as i16)
        .collect();
    HeightGrid::from_samples(rect, size, samples).expect("valid grid")
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    let ramp = ColorRamp::default();
    let zoomed = GeoBounds::from_corners(GeoPoint::new(49.4, 10.4), GeoPoint::new(49.6, 10.6));

    for size in [SRTM3_SIZE, SRTM1_SIZE] {
        let grid = sloped_grid(size);

        group.bench_with_input(BenchmarkId::new("whole_tile", size), &grid, |b, grid| {
            b.iter(|| rasterize(black_box(grid), &ramp, &GeoBounds::unbounded(), false).expect("supported grid"));
        });

        group.bench_with_input(BenchmarkId::new("zoomed_viewport", size), &grid, |b, grid| {
            b.iter(|| rasterize(black_box(grid), &ramp, &zoomed, true).expect("supported grid"));
        });
    }

    group.finish();
}

fn bench_pointer(c: &mut Criterion) {
    let mut viewer = Viewer::new();
    viewer.load_grid(sloped_grid(SRTM1_SIZE));

    c.bench_function("pointer_moved_srtm1", |b| {
        b.iter(|| viewer.pointer_moved(black_box(49.5123), black_box(10.4321)));
    });
}

criterion_group!(benches, bench_rasterize, bench_pointer);
criterion_main!(benches);
