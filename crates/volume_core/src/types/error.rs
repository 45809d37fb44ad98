//! Error types for series generation and output.

use chrono::{NaiveDate, Weekday};
use std::path::PathBuf;
use thiserror::Error;

/// Categorised series errors.
///
/// # Variants
/// - `InvalidDateRange`: End date precedes start date
/// - `UnmappedWeekday`: A weekday has no configured offset
/// - `InvalidParameter`: Model parameter outside its valid domain
/// - `DateParse`: Malformed `YYYY-MM-DD` input
/// - `Io`: Output destination could not be written
/// - `Csv`: CSV serialisation failed
///
/// # Examples
/// ```
/// use volume_core::SeriesError;
///
/// let err = SeriesError::InvalidParameter {
///     name: "noise_std_dev",
///     value: "must be non-negative, got -1".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid parameter 'noise_std_dev': must be non-negative, got -1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum SeriesError {
    /// End date is before start date.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// First day of the requested range
        start: NaiveDate,
        /// Last day of the requested range
        end: NaiveDate,
    },

    /// Weekday missing from the offset configuration.
    #[error("No weekly offset configured for {0}")]
    UnmappedWeekday(Weekday),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    DateParse(String),

    /// Output destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// CSV serialisation failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SeriesError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    /// Create an I/O error bound to a destination path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_range_display() {
        let err = SeriesError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: end 2024-01-01 is before start 2024-01-10"
        );
    }

    #[test]
    fn test_unmapped_weekday_display() {
        let err = SeriesError::UnmappedWeekday(Weekday::Sat);
        assert!(err.to_string().contains("Sat"));
    }

    #[test]
    fn test_io_error_keeps_reason() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = SeriesError::io("/tmp/out.csv", source);
        let display = err.to_string();
        assert!(display.contains("/tmp/out.csv"));
        assert!(display.contains("read-only"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
