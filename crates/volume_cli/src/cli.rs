//! Command line arguments.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Synthetic daily warehouse volume generator
///
/// Without arguments, writes three years of daily volumes
/// (2022-01-01..2024-12-31) to warehouse_daily_volume.csv.
#[derive(Parser, Debug, Clone)]
#[command(name = "volume-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First day of the series (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Last day of the series, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,

    /// Seed for the noise generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the noise component
    #[arg(long)]
    pub no_noise: bool,

    /// Also write the per-day component breakdown to this CSV file
    #[arg(long)]
    pub components: Option<PathBuf>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    volume_core::types::parse_date(s).map_err(|e| e.to_string())
}
