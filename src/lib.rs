//! Mondrian-style grid partition generation
//!
//! A square canvas of N×N cells is filled with non-overlapping rectangular
//! quads whose sides come from a restricted set of block sizes. The generator
//! walks the grid in raster order, places a randomly chosen feasible block at
//! each free cell, and terminates once the canvas is covered exactly. A PNG
//! adapter renders the result in the flat primary-color style.

#![forbid(unsafe_code)]

/// Core partition algorithm: candidate enumeration, raster scanning, and the
/// generation loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial primitives and occupancy tracking
pub mod spatial;

pub use algorithm::executor::{generate, generate_seeded};
pub use io::error::{PartitionError, Result};
pub use spatial::geometry::{Dimensions, Position, Quad};
