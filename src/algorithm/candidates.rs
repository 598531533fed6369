//! Candidate block-size enumeration at a fixed origin cell
//!
//! Widths are accepted only when the whole top row of the block is in-bounds
//! and free. Heights are then checked against the grid boundary alone; rows
//! below the top row are not re-verified. That asymmetry is safe here: quads
//! are placed in raster order of their origins, so any occupied cell below a
//! fully free top row would belong to a quad that also covers that row.

use crate::spatial::geometry::{Dimensions, Position};
use crate::spatial::grid::OccupancyGrid;
use rand::Rng;

/// Enumerate every block size placeable with its origin at `origin`
///
/// Emits one `(width, height)` pair per feasible width, in the order of the
/// allowed-size set, with the height drawn uniformly at random from the
/// allowed heights that fit below `origin.y`. An empty result at a free cell
/// means the allowed-size set cannot tile the remainder of the grid.
pub fn candidate_dimensions<R: Rng>(
    grid: &OccupancyGrid,
    origin: Position,
    allowed_sizes: &[usize],
    rng: &mut R,
) -> Vec<Dimensions> {
    let grid_size = grid.size();
    let mut candidates = Vec::new();

    for &width in allowed_sizes {
        let top_row_free =
            (0..width).all(|i| !grid.is_occupied(origin.x + i as i32, origin.y));
        if !top_row_free {
            continue;
        }

        let feasible_heights: Vec<usize> = allowed_sizes
            .iter()
            .copied()
            .filter(|&height| {
                (origin.y as usize)
                    .checked_add(height)
                    .is_some_and(|bottom| bottom <= grid_size)
            })
            .collect();

        if feasible_heights.is_empty() {
            continue;
        }

        let index = rng.random_range(0..feasible_heights.len());
        if let Some(&height) = feasible_heights.get(index) {
            candidates.push(Dimensions::new(width, height));
        }
    }

    candidates
}
