//! Generation constants and runtime configuration defaults

/// Block sizes used when no custom set is supplied
pub const DEFAULT_ALLOWED_SIZES: [usize; 4] = [1, 2, 4, 6];

/// Default canvas side length in cells
pub const DEFAULT_GRID_SIZE: usize = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Edge length of one grid cell in rendered pixels
pub const DEFAULT_PIXELS_PER_UNIT: u32 = 32;

/// Chance for a quad to receive a palette color instead of white
pub const DEFAULT_COLOR_PROBABILITY: f64 = 0.15;

/// Width of the black border drawn around each quad, in pixels
pub const DEFAULT_LINE_WIDTH: u32 = 2;
