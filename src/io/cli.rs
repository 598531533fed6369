//! Command-line interface for rendering generated partitions as PNG files

use crate::algorithm::executor::generate;
use crate::io::configuration::{
    DEFAULT_ALLOWED_SIZES, DEFAULT_COLOR_PROBABILITY, DEFAULT_GRID_SIZE, DEFAULT_LINE_WIDTH,
    DEFAULT_PIXELS_PER_UNIT, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::{RenderOptions, export_partition_as_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quadrille")]
#[command(
    author,
    version,
    about = "Generate Mondrian-style grid partitions as PNG images"
)]
/// Command-line arguments for the partition rendering tool
pub struct Cli {
    /// Output PNG file (used as a stem when --count exceeds 1)
    #[arg(value_name = "OUTPUT", default_value = "mondrian.png")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas side length in cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Allowed block sizes, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_ALLOWED_SIZES)]
    pub allowed_sizes: Vec<usize>,

    /// Edge length of one grid cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_PIXELS_PER_UNIT)]
    pub pixels_per_unit: u32,

    /// Chance for a quad to receive a palette color
    #[arg(short, long, default_value_t = DEFAULT_COLOR_PROBABILITY)]
    pub color_probability: f64,

    /// Border line width in pixels
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: u32,

    /// Number of variations to render, bumping the seed for each
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation and rendering with progress tracking
pub struct BatchRenderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRenderer {
    /// Create a new batch renderer from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (cli.should_show_progress() && cli.count > 1)
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and render every requested variation
    ///
    /// Each variation runs from its own seed, so any one of them can be
    /// reproduced individually with `--count 1 --seed <seed>`.
    ///
    /// # Errors
    ///
    /// Returns an error if input validation, generation, or PNG export fails
    pub fn process(&mut self) -> Result<()> {
        let options = RenderOptions {
            pixels_per_unit: self.cli.pixels_per_unit,
            color_probability: self.cli.color_probability,
            line_width: self.cli.line_width,
            ..RenderOptions::default()
        };

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            if let Some(ref pm) = self.progress_manager {
                pm.start_variation(seed);
            }

            // One source drives both placement and color decisions, matching
            // the single shared random stream of a generation run
            let mut rng = StdRng::seed_from_u64(seed);
            let quads = generate(self.cli.grid_size, &self.cli.allowed_sizes, &mut rng)?;

            let output_path = self.variation_path(index);
            export_partition_as_png(&quads, self.cli.grid_size, &options, &mut rng, &output_path)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_variation();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Output path for one variation of the batch
    fn variation_path(&self, index: usize) -> PathBuf {
        if self.cli.count == 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let name = format!("{}_{:03}.png", stem.to_string_lossy(), index + 1);

        match self.cli.output.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchRenderer, Cli};
    use clap::Parser;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let cli = Cli::parse_from(["quadrille"]);

        assert_eq!(cli.output.to_string_lossy(), "mondrian.png");
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.grid_size, 16);
        assert_eq!(cli.allowed_sizes, vec![1, 2, 4, 6]);
        assert_eq!(cli.pixels_per_unit, 32);
        assert_eq!(cli.count, 1);
    }

    #[test]
    fn test_allowed_sizes_parse_as_comma_list() {
        let cli = Cli::parse_from(["quadrille", "--allowed-sizes", "1,3,5"]);

        assert_eq!(cli.allowed_sizes, vec![1, 3, 5]);
    }

    #[test]
    fn test_variation_paths_number_from_one() {
        let cli = Cli::parse_from(["quadrille", "out/tiling.png", "--count", "3"]);
        let renderer = BatchRenderer::new(cli);

        assert_eq!(
            renderer.variation_path(0).to_string_lossy(),
            "out/tiling_001.png"
        );
        assert_eq!(
            renderer.variation_path(2).to_string_lossy(),
            "out/tiling_003.png"
        );
    }
}
