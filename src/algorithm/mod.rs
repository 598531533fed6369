//! Core partition algorithm
/// Candidate block-size enumeration at a fixed origin
pub mod candidates;
/// Generation loop and entry points
pub mod executor;
/// Raster-order free-cell scanning
pub mod scan;
