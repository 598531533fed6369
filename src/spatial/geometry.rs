//! Grid-space primitives for the partition: positions, block dimensions,
//! and placed quads
//!
//! Grid coordinates are 0-indexed with x increasing rightward and y increasing
//! downward. The raster scan uses a sentinel position to signal exhaustion, so
//! coordinates are signed even though live positions are always non-negative.

use std::fmt;

/// A cell coordinate in grid space
///
/// `Position::SENTINEL` marks "no further position exists" and is distinct
/// from every valid in-grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Column index, increasing rightward
    pub x: i32,
    /// Row index, increasing downward
    pub y: i32,
}

impl Position {
    /// Termination signal returned by the raster scan once the grid is full
    pub const SENTINEL: Self = Self { x: -1, y: -1 };

    /// Create a position from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Test whether this is the termination sentinel
    pub const fn is_sentinel(self) -> bool {
        self.x == -1 && self.y == -1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a block, in grid cells
///
/// Both axes are drawn from the allowed-size set configured for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Horizontal span in cells
    pub width: usize,
    /// Vertical span in cells
    pub height: usize,
}

impl Dimensions {
    /// Create a dimensions pair
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One placed block of the partition
///
/// Quads are immutable once placed; the generator emits them in raster order
/// of their origins and together they tile the grid exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    /// Top-left cell of the block
    pub origin: Position,
    /// Spanned cells per axis
    pub size: Dimensions,
}

impl Quad {
    /// Create a quad from its origin cell and size
    pub const fn new(origin: Position, size: Dimensions) -> Self {
        Self { origin, size }
    }

    /// Number of grid cells the quad covers
    pub const fn area(self) -> usize {
        self.size.width * self.size.height
    }

    /// Screen-space origin for Y-up renderers
    ///
    /// Grid y increases downward, so the vertical coordinate is negated for
    /// scene-graph consumers. Pixel renderers with a Y-down convention should
    /// use the grid origin directly instead.
    pub const fn screen_origin(self, pixels_per_unit: i32) -> [i32; 2] {
        [
            self.origin.x * pixels_per_unit,
            -(self.origin.y * pixels_per_unit),
        ]
    }

    /// Screen-space extent of the quad in pixels
    pub const fn screen_size(self, pixels_per_unit: u32) -> [u32; 2] {
        [
            self.size.width as u32 * pixels_per_unit,
            self.size.height as u32 * pixels_per_unit,
        ]
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.size, self.origin)
    }
}
