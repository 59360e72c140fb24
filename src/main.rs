//! CLI entry point for the brick layout optimizer

use brickplan::io::cli::{Cli, FileProcessor};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> brickplan::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
