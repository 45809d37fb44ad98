//! Generator configuration management.
//!
//! Loads run configuration from a TOML file. Every key is optional; missing
//! keys take the reference calibration. Command line flags are applied on top
//! with [`AppConfig::with_overrides`].

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use volume_core::model::ModelParameters;
use volume_core::types::{DateRange, WeeklyProfile};
use volume_core::SeriesError;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "warehouse_daily_volume.csv";

/// Run configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Series output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Optional component breakdown output path
    pub components: Option<PathBuf>,

    /// Noise seed; drawn fresh per run when absent
    pub seed: Option<u64>,

    #[serde(default)]
    pub range: RangeConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

/// `[range]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    #[serde(default = "default_start")]
    pub start: NaiveDate,
    #[serde(default = "default_end")]
    pub end: NaiveDate,
}

/// `[model]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default = "default_base_volume")]
    pub base_volume: i64,
    #[serde(default = "default_trend_slope")]
    pub trend_slope: f64,
    #[serde(default = "default_yearly_amplitude")]
    pub yearly_amplitude: f64,
    #[serde(default = "default_noise_std_dev")]
    pub noise_std_dev: f64,
    /// Offsets keyed by weekday name; must cover all seven days when given
    pub weekly_offsets: Option<BTreeMap<String, f64>>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_start() -> NaiveDate {
    DateRange::default().start()
}

fn default_end() -> NaiveDate {
    DateRange::default().end()
}

fn default_base_volume() -> i64 {
    ModelParameters::default().base_volume()
}

fn default_trend_slope() -> f64 {
    ModelParameters::default().trend_slope()
}

fn default_yearly_amplitude() -> f64 {
    ModelParameters::default().yearly_amplitude()
}

fn default_noise_std_dev() -> f64 {
    ModelParameters::default().noise_std_dev()
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_volume: default_base_volume(),
            trend_slope: default_trend_slope(),
            yearly_amplitude: default_yearly_amplitude(),
            noise_std_dev: default_noise_std_dev(),
            weekly_offsets: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            components: None,
            seed: None,
            range: RangeConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(components) = &cli.components {
            self.components = Some(components.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(start) = cli.start {
            self.range.start = start;
        }
        if let Some(end) = cli.end {
            self.range.end = end;
        }
        if cli.no_noise {
            self.model.noise_std_dev = 0.0;
        }
        self
    }

    /// Validated date range
    pub fn date_range(&self) -> Result<DateRange, SeriesError> {
        DateRange::new(self.range.start, self.range.end)
    }

    /// Validated model parameters
    pub fn model_parameters(&self) -> Result<ModelParameters, SeriesError> {
        let weekly = match &self.model.weekly_offsets {
            Some(named) => WeeklyProfile::from_named(named)?,
            None => WeeklyProfile::default(),
        };

        ModelParameters::builder()
            .base_volume(self.model.base_volume)
            .trend_slope(self.model.trend_slope)
            .yearly_amplitude(self.model.yearly_amplitude)
            .weekly(weekly)
            .noise_std_dev(self.model.noise_std_dev)
            .build()
    }
}
