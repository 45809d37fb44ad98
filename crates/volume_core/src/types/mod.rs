//! Core value types for series generation.
//!
//! - [`DateRange`]: inclusive, daily-frequency calendar range
//! - [`WeeklyProfile`]: per-weekday additive offsets
//! - [`SeriesError`]: error type shared by the whole crate

mod date_range;
mod error;
mod weekday;

pub use date_range::{parse_date, DateRange};
pub use error::{Result, SeriesError};
pub use weekday::WeeklyProfile;
