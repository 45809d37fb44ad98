//! Daily volume series generator.
//!
//! [`VolumeSeriesGenerator`] evaluates the model over a [`DateRange`],
//! producing one [`DailyRecord`] per calendar day in date order.

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use tracing::debug;

use crate::model::{
    clamp_volume, trend_component, weekly_component, yearly_component, ModelParameters,
};
use crate::types::DateRange;

/// One output row: a calendar day and its volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    /// Calendar day, serialised as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Non-negative container volume
    pub volume: u64,
}

/// Per-day decomposition of the volume signal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ComponentRow {
    pub date: NaiveDate,
    /// Constant base volume
    pub base: f64,
    /// Linear trend, zero on the first day
    pub trend: f64,
    pub yearly: f64,
    pub weekly: f64,
    pub noise: f64,
    /// Clamped, truncated sum of the components
    pub volume: u64,
}

impl ComponentRow {
    /// Unclamped sum of all components.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.base + self.trend + self.yearly + self.weekly + self.noise
    }

    /// Projects the row onto its output record.
    #[inline]
    pub fn record(&self) -> DailyRecord {
        DailyRecord {
            date: self.date,
            volume: self.volume,
        }
    }
}

/// Synthetic daily volume generator.
///
/// # Examples
///
/// ```rust
/// use volume_core::prelude::*;
///
/// // Deterministic week: only the base volume and weekly pattern remain
/// let params = ModelParameters::builder()
///     .trend_slope(0.0)
///     .yearly_amplitude(0.0)
///     .noise_std_dev(0.0)
///     .build()
///     .unwrap();
/// let range = DateRange::from_ymd((2022, 1, 1), (2022, 1, 7)).unwrap();
///
/// let records = VolumeSeriesGenerator::new(params)
///     .generate(&range, &mut SeriesRng::from_seed(0));
/// let volumes: Vec<u64> = records.iter().map(|r| r.volume).collect();
/// assert_eq!(volumes, vec![80, 85, 120, 115, 105, 90, 110]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VolumeSeriesGenerator {
    params: ModelParameters,
}

impl VolumeSeriesGenerator {
    /// Creates a generator for a validated parameter set.
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Returns the model parameters.
    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Generates one record per day of `range`, in date order.
    ///
    /// Noise is drawn from `rng`, one sample per day. With a zero noise
    /// standard deviation `rng` is left untouched and the output is fully
    /// deterministic.
    pub fn generate<R: Rng + ?Sized>(&self, range: &DateRange, rng: &mut R) -> Vec<DailyRecord> {
        self.decompose(range, rng)
            .iter()
            .map(ComponentRow::record)
            .collect()
    }

    /// Generates the per-day component breakdown for `range`.
    ///
    /// Consumes `rng` exactly as [`generate`](Self::generate) does, so the
    /// same seed yields matching volumes from both.
    pub fn decompose<R: Rng + ?Sized>(&self, range: &DateRange, rng: &mut R) -> Vec<ComponentRow> {
        let params = &self.params;
        debug!(
            range = %range,
            days = range.day_count(),
            base_volume = params.base_volume(),
            trend_slope = params.trend_slope(),
            yearly_amplitude = params.yearly_amplitude(),
            noise_std_dev = params.noise_std_dev(),
            "Generating volume series"
        );

        let noise = self.noise_distribution();
        let base = params.base_volume() as f64;

        range
            .days()
            .enumerate()
            .map(|(index, date)| {
                let trend = trend_component(index, params.trend_slope());
                let yearly = yearly_component(date, params.yearly_amplitude());
                let weekly = weekly_component(date, params.weekly());
                let noise = match &noise {
                    Some(normal) => normal.sample(rng),
                    None => 0.0,
                };
                let raw = base + trend + yearly + weekly + noise;

                ComponentRow {
                    date,
                    base,
                    trend,
                    yearly,
                    weekly,
                    noise,
                    volume: clamp_volume(raw),
                }
            })
            .collect()
    }

    /// `None` when noise is disabled.
    fn noise_distribution(&self) -> Option<Normal<f64>> {
        let std_dev = self.params.noise_std_dev();
        if std_dev > 0.0 {
            // std_dev is finite and positive after validation
            Normal::new(0.0, std_dev).ok()
        } else {
            None
        }
    }
}

/// Descriptive statistics of a generated series.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeriesSummary {
    /// Number of days
    pub days: usize,
    /// Sum of all volumes; wider than a single volume so it cannot overflow
    pub total: u128,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
}

impl SeriesSummary {
    /// Summarises `records`; `None` for an empty slice.
    pub fn from_records(records: &[DailyRecord]) -> Option<Self> {
        let min = records.iter().map(|r| r.volume).min()?;
        let max = records.iter().map(|r| r.volume).max()?;
        let total: u128 = records.iter().map(|r| u128::from(r.volume)).sum();

        Some(Self {
            days: records.len(),
            total,
            min,
            max,
            mean: total as f64 / records.len() as f64,
        })
    }
}
