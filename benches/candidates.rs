//! Performance measurement for candidate size enumeration

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use quadrille::algorithm::candidates::candidate_dimensions;
use quadrille::spatial::geometry::{Dimensions, Position};
use quadrille::spatial::grid::OccupancyGrid;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Measures enumeration against a partially occupied row
fn bench_candidate_enumeration(c: &mut Criterion) {
    let Ok(mut grid) = OccupancyGrid::new(64) else {
        return;
    };
    grid.mark_occupied(Position::new(8, 0), Dimensions::new(4, 4));
    grid.mark_occupied(Position::new(20, 0), Dimensions::new(6, 6));

    c.bench_function("candidate_dimensions_64", |b| {
        let mut rng = StdRng::seed_from_u64(12345);
        b.iter(|| {
            let candidates =
                candidate_dimensions(&grid, Position::new(2, 0), &[1, 2, 4, 6], &mut rng);
            black_box(candidates.len());
        });
    });
}

criterion_group!(benches, bench_candidate_enumeration);
criterion_main!(benches);
