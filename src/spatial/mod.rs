//! Spatial data structures for partition generation
//!
//! This module contains spatial-related functionality including:
//! - Grid-space geometry (positions, dimensions, quads)
//! - Occupancy grid state for one generation run
//! - Coverage diagnostics over placed quads

/// Positions, dimensions, and placed quads
pub mod geometry;
/// Occupancy grid state and coverage rasterization
pub mod grid;

pub use geometry::{Dimensions, Position, Quad};
pub use grid::OccupancyGrid;
