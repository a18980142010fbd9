//! Benchmark frontier detection performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use disha_frontier::frontier::{classify_boundary, segment_clusters};
use disha_frontier::{CellState, FinderConfig, FrontierFinder, OccupancyGrid, WorldPoint};

/// Square map explored out to `explored_radius` cells from the center.
///
/// Produces one ring-shaped frontier plus scattered unknown pockets inside.
fn explored_disc(size: usize, explored_radius: f32) -> OccupancyGrid {
    let mut grid = OccupancyGrid::unknown(size, size, 0.05, WorldPoint::ZERO);
    let c = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - c;
            let dy = y as f32 - c;
            if (dx * dx + dy * dy).sqrt() > explored_radius {
                continue;
            }
            let pocket = x % 17 == 3 && y % 13 == 5;
            let wall = x % 40 == 0 && y % 7 != 0;
            grid.cells[y * size + x] = if pocket {
                CellState::Unknown
            } else if wall {
                CellState::Occupied
            } else {
                CellState::Free
            };
        }
    }
    grid
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_frontiers");
    let finder = FrontierFinder::new(FinderConfig::default()).unwrap();

    for size in [200, 400, 800] {
        let grid = explored_disc(size, size as f32 * 0.35);
        let view = grid.view().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &view, |b, view| {
            b.iter(|| finder.find(black_box(view)).unwrap())
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let grid = explored_disc(800, 280.0);
    let view = grid.view().unwrap();

    c.bench_function("classify_boundary_800", |b| {
        b.iter(|| classify_boundary(black_box(&view)))
    });

    let marks = classify_boundary(&view);
    c.bench_function("segment_clusters_800", |b| {
        b.iter(|| segment_clusters(black_box(&view), marks.clone(), usize::MAX).unwrap())
    });
}

criterion_group!(benches, bench_find, bench_stages);
criterion_main!(benches);
