//! volume-gen: writes a synthetic daily warehouse volume series to CSV.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use volume_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG takes precedence over --verbose
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("volume_core={level},volume_cli={level}")));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let report = run(&cli)?;

    println!(
        "Synthetic data generated and saved to {}",
        report.written.path.display()
    );
    Ok(())
}
