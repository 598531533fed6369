//! Generation loop driving a partition run to completion
//!
//! One run owns its occupancy grid exclusively: starting from (0, 0), it
//! enumerates candidate block sizes at the current free cell, places one at
//! random, stamps the grid, and advances through the raster scan until the
//! sentinel position is reached. Placement strictly reduces the number of
//! free cells, so every run terminates within `size * size` iterations.

use crate::algorithm::candidates::candidate_dimensions;
use crate::algorithm::scan::next_free_position;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{PartitionError, Result, invalid_config};
use crate::spatial::geometry::{Position, Quad};
use crate::spatial::grid::OccupancyGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Validate the allowed-size set before a run
///
/// Grid size validation lives in [`OccupancyGrid::new`]; this checks the
/// remaining entry conditions so failures surface before any work happens.
fn validate_allowed_sizes(allowed_sizes: &[usize]) -> Result<()> {
    if allowed_sizes.is_empty() {
        return Err(invalid_config(
            "allowed_sizes",
            &"[]",
            &"at least one block size is required",
        ));
    }

    if allowed_sizes.contains(&0) {
        return Err(invalid_config(
            "allowed_sizes",
            &format!("{allowed_sizes:?}"),
            &"block sizes must be positive",
        ));
    }

    // Sizes past the dimension cap can never fit and would overflow the
    // feasibility arithmetic
    if allowed_sizes.iter().any(|&size| size > MAX_GRID_DIMENSION) {
        return Err(invalid_config(
            "allowed_sizes",
            &format!("{allowed_sizes:?}"),
            &"block sizes exceed the maximum dimension",
        ));
    }

    Ok(())
}

/// Generate a full partition of a `grid_size` × `grid_size` canvas
///
/// Returns the placed quads in raster order of their origins; together they
/// cover the canvas exactly, with no gaps or overlaps. The result is
/// deterministic for a given random source state, and all randomness (height
/// selection and candidate choice) draws from `rng`.
///
/// # Errors
///
/// - [`PartitionError::InvalidSize`] when `grid_size` is zero or exceeds the
///   maximum dimension
/// - [`PartitionError::InvalidConfig`] when `allowed_sizes` is empty,
///   contains zero, or contains a size beyond the maximum dimension
/// - [`PartitionError::GenerationStalled`] when no block fits at a free cell,
///   which can only happen when 1 is absent from `allowed_sizes`
pub fn generate<R: Rng>(
    grid_size: usize,
    allowed_sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<Quad>> {
    validate_allowed_sizes(allowed_sizes)?;
    let mut grid = OccupancyGrid::new(grid_size)?;

    let mut quads = Vec::new();
    // (0, 0) is free by construction and serves as the first fill position
    // without a preceding scan
    let mut position = Position::new(0, 0);

    while !position.is_sentinel() {
        let candidates = candidate_dimensions(&grid, position, allowed_sizes, rng);

        if candidates.is_empty() {
            return Err(PartitionError::GenerationStalled {
                position: [position.x, position.y],
                placed: quads.len(),
            });
        }

        let index = rng.random_range(0..candidates.len());
        let Some(&chosen) = candidates.get(index) else {
            // random_range keeps the index in bounds
            return Err(PartitionError::GenerationStalled {
                position: [position.x, position.y],
                placed: quads.len(),
            });
        };

        quads.push(Quad::new(position, chosen));
        grid.mark_occupied(position, chosen);

        position = next_free_position(&grid, position);
    }

    Ok(quads)
}

/// Generate a partition from a fixed seed
///
/// Convenience wrapper around [`generate`] that owns a [`StdRng`] seeded with
/// `seed`; identical inputs always produce the identical quad sequence.
///
/// # Errors
///
/// Propagates every error [`generate`] can return.
pub fn generate_seeded(grid_size: usize, allowed_sizes: &[usize], seed: u64) -> Result<Vec<Quad>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(grid_size, allowed_sizes, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::{generate, generate_seeded};
    use crate::io::error::PartitionError;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_placements_reduce_free_cells_to_zero() {
        let quads = generate_seeded(10, &[1, 2, 4, 6], 42).unwrap();

        let covered: usize = quads.iter().map(|quad| quad.area()).sum();
        assert_eq!(covered, 100);
        assert!(quads.len() <= 100);
    }

    #[test]
    fn test_stall_aborts_instead_of_skipping() {
        // {2} tiles the first 2x2 block, then the last column stalls
        let result = generate_seeded(3, &[2], 42);

        match result {
            Err(PartitionError::GenerationStalled { position, placed }) => {
                assert_eq!(position, [2, 0]);
                assert!(placed >= 1);
            }
            _ => unreachable!("Expected GenerationStalled error type"),
        }
    }

    // A size near usize::MAX once wrapped the height feasibility arithmetic;
    // it must be rejected before any placement work starts
    #[test]
    fn test_oversized_block_size_fails_fast() {
        assert!(matches!(
            generate_seeded(2, &[1, usize::MAX], 0),
            Err(PartitionError::InvalidConfig { .. })
        ));
        assert!(matches!(
            generate_seeded(2, &[10_001], 0),
            Err(PartitionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_shared_rng_advances_across_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = generate(8, &[1, 2, 4, 6], &mut rng).unwrap();
        let second = generate(8, &[1, 2, 4, 6], &mut rng).unwrap();

        // Both runs are valid but the shared source keeps advancing
        let first_area: usize = first.iter().map(|quad| quad.area()).sum();
        let second_area: usize = second.iter().map(|quad| quad.area()).sum();
        assert_eq!(first_area, 64);
        assert_eq!(second_area, 64);
    }
}
