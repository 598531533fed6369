//! Raster-order search for the next free cell
//!
//! The scan is strictly monotonic: it always advances at least one step from
//! the previous position and wraps left-to-right, top-to-bottom. Together with
//! the finite grid this bounds every generation run.

use crate::spatial::geometry::Position;
use crate::spatial::grid::OccupancyGrid;

/// Find the first free cell after `previous` in raster order
///
/// Returns [`Position::SENTINEL`] once advancing exhausts the grid. An empty
/// grid (size zero) yields the sentinel on the very first call.
pub fn next_free_position(grid: &OccupancyGrid, previous: Position) -> Position {
    let size = grid.size() as i32;

    let mut next = previous;
    if next.x + 1 == size {
        next.x = 0;
        next.y += 1;
    } else {
        next.x += 1;
    }

    if next.x >= size || next.y >= size {
        return Position::SENTINEL;
    }

    while grid.is_occupied(next.x, next.y) {
        next.x += 1;

        if next.x == size {
            next.x = 0;
            next.y += 1;

            if next.y == size {
                return Position::SENTINEL;
            }
        }
    }

    next
}
