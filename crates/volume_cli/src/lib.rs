//! # Volume Generator CLI
//!
//! Operational entry point for synthetic warehouse volume series.
//!
//! Resolves the run configuration (defaults, then an optional TOML file,
//! then command line flags), generates the series with
//! [`volume_core::VolumeSeriesGenerator`] and writes it as CSV.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{CliError, ConfigError, Result};

use tracing::info;
use volume_core::output::{CsvSeriesWriter, WrittenFile};
use volume_core::rng::SeriesRng;
use volume_core::{ComponentRow, SeriesSummary, VolumeSeriesGenerator};

/// Outcome of a generator run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Seed the noise was drawn with
    pub seed: u64,
    /// Series file
    pub written: WrittenFile,
    /// Component breakdown file, when requested
    pub components: Option<WrittenFile>,
    pub summary: Option<SeriesSummary>,
}

/// Resolve the configuration for `cli` and run the generator
pub fn run(cli: &Cli) -> Result<RunReport> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    }
    .with_overrides(cli);

    generate(&config)
}

/// Generate and write the series described by `config`
pub fn generate(config: &AppConfig) -> Result<RunReport> {
    // Validation happens before any computation or file access
    let range = config.date_range()?;
    let params = config.model_parameters()?;

    let mut rng = match config.seed {
        Some(seed) => SeriesRng::from_seed(seed),
        None => SeriesRng::from_entropy(),
    };
    info!(
        range = %range,
        days = range.day_count(),
        seed = rng.seed(),
        "Generating synthetic volume series"
    );

    let rows = VolumeSeriesGenerator::new(params).decompose(&range, &mut rng);
    let records: Vec<_> = rows.iter().map(ComponentRow::record).collect();

    let written = CsvSeriesWriter::new(&config.output).write(&records)?;
    let components = match &config.components {
        Some(path) => Some(CsvSeriesWriter::new(path).write_components(&rows)?),
        None => None,
    };

    let summary = SeriesSummary::from_records(&records);
    if let Some(summary) = &summary {
        info!(
            days = summary.days,
            total = summary.total,
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            "Series summary"
        );
    }

    Ok(RunReport {
        seed: rng.seed(),
        written,
        components,
        summary,
    })
}
