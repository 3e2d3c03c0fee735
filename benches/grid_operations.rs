//! Benchmark grid operations performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drishti_grid::{
    compute_polar_histogram, extract_centered, merge_centered, GridCoord, GridPoint,
    HistogramGrid,
};

/// Grid with roughly `fill_permille`/1000 of its cells holding detections.
fn scattered_grid(rows: usize, cols: usize, fill_permille: u32) -> HistogramGrid {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = HistogramGrid::with_resolution(rows, cols, 10);

    for x in 0..rows {
        for y in 0..cols {
            if rng.gen_range(0..1000) < fill_permille {
                let count = rng.gen_range(1..16);
                grid.set(GridCoord::new(x as i32, y as i32), count).unwrap();
            }
        }
    }
    grid
}

fn bench_increment(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut grid = HistogramGrid::new(200, 200);
    let coords: Vec<GridCoord> = (0..1024)
        .map(|_| GridCoord::new(rng.gen_range(0..200), rng.gen_range(0..200)))
        .collect();

    c.bench_function("increment_1024", |b| {
        b.iter(|| {
            for &coord in &coords {
                grid.increment(black_box(coord)).unwrap();
            }
        })
    });
}

fn bench_window_roundtrip(c: &mut Criterion) {
    let grid = scattered_grid(400, 400, 50);
    let mut working = grid.clone();

    // Centers sweep across the grid, including clipped edge placements
    let centers = [
        GridCoord::new(0, 0),
        GridCoord::new(16, 380),
        GridCoord::new(200, 200),
        GridCoord::new(399, 12),
        GridCoord::new(399, 399),
    ];

    c.bench_function("extract_merge_33x33", |b| {
        b.iter(|| {
            for &center in &centers {
                let window = extract_centered(&working, center, 33, 33).unwrap();
                if window.grid.rows() % 2 == 1 && window.grid.cols() % 2 == 1 {
                    merge_centered(&mut working, &window.grid, center).unwrap();
                }
                black_box(&window.rect);
            }
        })
    });
}

fn bench_polar_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_histogram");

    for side in [100usize, 200, 400] {
        let grid = scattered_grid(side, side, 50);
        let origin = GridPoint::new(side as f32 / 2.0, side as f32 / 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| {
                let histogram =
                    compute_polar_histogram(black_box(grid), origin, 72).unwrap();
                black_box(histogram)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_increment,
    bench_window_roundtrip,
    bench_polar_histogram
);
criterion_main!(benches);
