//! PNG rendering of a placed-quad list in the flat Mondrian style
//!
//! Quads are drawn on a white canvas with black borders; a configurable
//! fraction receives a color from the palette, chosen at random per quad.
//! Pixel space is Y-down, matching grid space, so no coordinate flip happens
//! here.

use crate::io::error::{PartitionError, Result};
use crate::spatial::geometry::Quad;
use image::{ImageBuffer, Rgba};
use rand::Rng;
use std::path::Path;

/// Primary palette used when no custom colors are supplied
///
/// Cadmium red, cobalt blue, and cadmium yellow, approximating the classic
/// composition paintings.
pub const DEFAULT_PALETTE: [[u8; 4]; 3] = [
    [205, 56, 44, 255],
    [34, 80, 149, 255],
    [250, 201, 1, 255],
];

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([17, 17, 17, 255]);

/// Rendering parameters for the PNG adapter
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Edge length of one grid cell in pixels
    pub pixels_per_unit: u32,
    /// Chance for a quad to receive a palette color instead of white
    pub color_probability: f64,
    /// Width of the black border around each quad, in pixels
    pub line_width: u32,
    /// Fill colors drawn from when a quad is colored
    pub palette: Vec<[u8; 4]>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: crate::io::configuration::DEFAULT_PIXELS_PER_UNIT,
            color_probability: crate::io::configuration::DEFAULT_COLOR_PROBABILITY,
            line_width: crate::io::configuration::DEFAULT_LINE_WIDTH,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Render a quad list to an RGBA canvas of `grid_size * pixels_per_unit`
/// pixels per side
///
/// Color decisions draw from `rng`, so a seeded source reproduces the exact
/// image. Quads extending past the canvas are clipped rather than wrapped.
pub fn render_partition<R: Rng>(
    quads: &[Quad],
    grid_size: usize,
    options: &RenderOptions,
    rng: &mut R,
) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let side = grid_size as u32 * options.pixels_per_unit;
    let mut img = ImageBuffer::from_pixel(side, side, WHITE);

    for quad in quads {
        if quad.origin.x < 0 || quad.origin.y < 0 {
            continue;
        }

        let fill = if rng.random::<f64>() < options.color_probability {
            let index = rng.random_range(0..options.palette.len().max(1));
            options
                .palette
                .get(index)
                .map_or(WHITE, |&rgba| Rgba(rgba))
        } else {
            WHITE
        };

        let origin_x = quad.origin.x as u32 * options.pixels_per_unit;
        let origin_y = quad.origin.y as u32 * options.pixels_per_unit;
        let [width, height] = quad.screen_size(options.pixels_per_unit);

        for dy in 0..height {
            for dx in 0..width {
                let px = origin_x + dx;
                let py = origin_y + dy;
                if px >= side || py >= side {
                    continue;
                }

                let on_border = dx < options.line_width
                    || dy < options.line_width
                    || dx >= width.saturating_sub(options.line_width)
                    || dy >= height.saturating_sub(options.line_width);

                let color = if on_border { BLACK } else { fill };
                img.put_pixel(px, py, color);
            }
        }
    }

    img
}

/// Render a quad list and save it as a PNG
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`PartitionError::FileSystem`] when the parent directory cannot be
/// created and [`PartitionError::ImageExport`] when the image cannot be saved.
pub fn export_partition_as_png<R: Rng>(
    quads: &[Quad],
    grid_size: usize,
    options: &RenderOptions,
    rng: &mut R,
    output_path: &Path,
) -> Result<()> {
    let img = render_partition(quads, grid_size, options, rng);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PartitionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| PartitionError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
