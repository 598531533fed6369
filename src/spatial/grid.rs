//! Occupancy tracking for one generation run
//!
//! The grid is a single contiguous bit buffer indexed by `y * size + x`. It is
//! owned exclusively by the generator for the duration of a run: cells move
//! from free to occupied when a quad is stamped and never revert.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{PartitionError, Result};
use crate::spatial::geometry::{Dimensions, Position, Quad};
use bitvec::prelude::BitVec;
use ndarray::Array2;

/// FREE/OCCUPIED state for every cell of an N×N canvas
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: BitVec,
    size: usize,
}

impl OccupancyGrid {
    /// Allocate an all-free grid of `size` × `size` cells
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidSize`] when `size` is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PartitionError::InvalidSize {
                size,
                reason: "grid size must be positive",
            });
        }
        if size > MAX_GRID_DIMENSION {
            return Err(PartitionError::InvalidSize {
                size,
                reason: "grid size exceeds the maximum dimension",
            });
        }

        Ok(Self {
            cells: BitVec::repeat(false, size * size),
            size,
        })
    }

    /// Side length of the grid in cells
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells still free
    pub fn free_cells(&self) -> usize {
        self.cells.count_zeros()
    }

    /// Occupancy test usable directly in availability scans
    ///
    /// Any out-of-bounds query reads as occupied, so callers can probe
    /// candidate spans without a separate bounds branch.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return true;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.size || y >= self.size {
            return true;
        }

        self.cells.get(y * self.size + x).as_deref() == Some(&true)
    }

    /// Stamp the rectangle `[origin.x, origin.x + width) × [origin.y,
    /// origin.y + height)` as occupied
    ///
    /// The caller guarantees the rectangle is in-bounds and all-free via
    /// candidate enumeration; cells outside the grid are ignored rather than
    /// wrapped.
    pub fn mark_occupied(&mut self, origin: Position, size: Dimensions) {
        if origin.x < 0 || origin.y < 0 {
            return;
        }

        for j in 0..size.height {
            for i in 0..size.width {
                let x = origin.x as usize + i;
                let y = origin.y as usize + j;
                if x < self.size && y < self.size {
                    self.cells.set(y * self.size + x, true);
                }
            }
        }
    }
}

/// Rasterize a quad list into a per-cell cover count
///
/// Cell `[y, x]` holds how many quads cover it; a valid partition yields a
/// matrix of all ones. Quad cells falling outside the grid are dropped.
pub fn coverage_counts(quads: &[Quad], grid_size: usize) -> Array2<u32> {
    let mut counts = Array2::zeros((grid_size, grid_size));

    for quad in quads {
        if quad.origin.x < 0 || quad.origin.y < 0 {
            continue;
        }

        for j in 0..quad.size.height {
            for i in 0..quad.size.width {
                let x = quad.origin.x as usize + i;
                let y = quad.origin.y as usize + j;
                if let Some(count) = counts.get_mut([y, x]) {
                    *count += 1;
                }
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::{OccupancyGrid, coverage_counts};
    use crate::spatial::geometry::{Dimensions, Position, Quad};

    #[test]
    fn test_new_grid_is_all_free() {
        let grid = OccupancyGrid::new(4).unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.free_cells(), 16);
        assert!(!grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(3, 3));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(OccupancyGrid::new(0).is_err());
    }

    #[test]
    fn test_out_of_bounds_reads_as_occupied() {
        let grid = OccupancyGrid::new(3).unwrap();

        assert!(grid.is_occupied(-1, 0));
        assert!(grid.is_occupied(0, -1));
        assert!(grid.is_occupied(3, 0));
        assert!(grid.is_occupied(0, 3));
    }

    #[test]
    fn test_mark_occupied_stamps_exact_rectangle() {
        let mut grid = OccupancyGrid::new(4).unwrap();
        grid.mark_occupied(Position::new(1, 1), Dimensions::new(2, 2));

        assert_eq!(grid.free_cells(), 12);
        assert!(grid.is_occupied(1, 1));
        assert!(grid.is_occupied(2, 2));
        assert!(!grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(3, 1));
        assert!(!grid.is_occupied(1, 3));
    }

    #[test]
    fn test_coverage_counts_flags_overlap_and_gap() {
        let quads = vec![
            Quad::new(Position::new(0, 0), Dimensions::new(2, 2)),
            Quad::new(Position::new(1, 1), Dimensions::new(1, 1)),
        ];

        let counts = coverage_counts(&quads, 3);

        assert_eq!(counts.get([1, 1]).copied(), Some(2));
        assert_eq!(counts.get([0, 1]).copied(), Some(1));
        assert_eq!(counts.get([2, 2]).copied(), Some(0));
    }
}
