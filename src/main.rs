//! sort-report CLI
//!
//! Presents one runtime comparison chart per dataset of a benchmark file.

use anyhow::Result;
use clap::Parser;
use sort_report::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout free for the chart viewer
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
