//! # Volume Core
//!
//! Synthetic daily container volume series for warehouse capacity studies.
//!
//! A series is the sum of four additive components evaluated per calendar day:
//!
//! - **Trend**: linear growth from the first day of the range
//! - **Yearly seasonality**: sinusoid with a 365.25-day period
//! - **Weekly seasonality**: fixed offset per weekday
//! - **Noise**: independent Gaussian draw per day
//!
//! The sum is clamped at zero and truncated to an integer volume.
//!
//! ## Modules
//!
//! - [`types`]: Date ranges, weekday profiles and error types
//! - [`model`]: Model parameters and the pure component functions
//! - [`rng`]: Seedable noise source
//! - [`generator`]: [`VolumeSeriesGenerator`] and its record types
//! - [`output`]: CSV serialisation of generated series
//!
//! ## Example
//!
//! ```rust
//! use volume_core::prelude::*;
//!
//! let range = DateRange::from_ymd((2022, 1, 1), (2022, 1, 31)).unwrap();
//! let params = ModelParameters::default();
//! let mut rng = SeriesRng::from_seed(7);
//!
//! let records = VolumeSeriesGenerator::new(params).generate(&range, &mut rng);
//! assert_eq!(records.len(), 31);
//! ```

pub mod generator;
pub mod model;
pub mod output;
pub mod rng;
pub mod types;

pub use generator::{ComponentRow, DailyRecord, SeriesSummary, VolumeSeriesGenerator};
pub use types::{Result, SeriesError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generator::{ComponentRow, DailyRecord, SeriesSummary, VolumeSeriesGenerator};
    pub use crate::model::{ModelParameters, ModelParametersBuilder};
    pub use crate::output::{write_records, CsvSeriesWriter};
    pub use crate::rng::SeriesRng;
    pub use crate::types::{DateRange, SeriesError, WeeklyProfile};
}
