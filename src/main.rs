//! CLI entry point for the Mondrian partition generator

use clap::Parser;
use quadrille::io::cli::{BatchRenderer, Cli};

fn main() -> quadrille::Result<()> {
    let cli = Cli::parse();
    let mut renderer = BatchRenderer::new(cli);
    renderer.process()
}
