//! CLI entry point for rendering light rail animations

use clap::Parser;
use lightrail::io::cli::{Cli, Renderer};
use lightrail::io::logging;

fn main() -> lightrail::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    Renderer::new(cli).run()
}
