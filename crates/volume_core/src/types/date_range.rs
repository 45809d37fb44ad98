//! Inclusive daily calendar ranges.
//!
//! # Examples
//!
//! ```
//! use volume_core::types::DateRange;
//!
//! let range = DateRange::from_ymd((2024, 2, 27), (2024, 3, 1)).unwrap();
//! // 2024 is a leap year: 27, 28, 29 Feb and 1 Mar
//! assert_eq!(range.day_count(), 4);
//! ```

use chrono::NaiveDate;
use std::fmt;

use super::error::{Result, SeriesError};

/// Contiguous calendar days from `start` to `end`, both inclusive.
///
/// The range is never empty: construction rejects `end < start`, and a
/// single-day range has `start == end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from its first and last day.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::InvalidDateRange` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(SeriesError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from `(year, month, day)` tuples.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::DateParse` for impossible calendar dates and
    /// `SeriesError::InvalidDateRange` if `end` is before `start`.
    pub fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Result<Self> {
        Self::new(ymd(start)?, ymd(end)?)
    }

    /// Parses a range from two ISO 8601 strings (`YYYY-MM-DD`).
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// First day of the range.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    #[inline]
    pub fn day_count(&self) -> usize {
        // end >= start is guaranteed by construction
        (self.end - self.start).num_days() as usize + 1
    }

    /// Iterates every day of the range in increasing order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.day_count())
    }
}

impl Default for DateRange {
    /// 2022-01-01 through 2024-12-31.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid calendar date"),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Parses a date from ISO 8601 format string (YYYY-MM-DD).
///
/// ```
/// use volume_core::types::parse_date;
///
/// let date = parse_date("2022-01-01").unwrap();
/// assert_eq!(date.to_string(), "2022-01-01");
/// assert!(parse_date("01/01/2022").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| SeriesError::DateParse(format!("'{}': {}", s, e)))
}

fn ymd((year, month, day): (i32, u32, u32)) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SeriesError::DateParse(format!("invalid date {}-{}-{}", year, month, day))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2022, 1, 1), date(2022, 1, 1)).unwrap();
        assert_eq!(range.day_count(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2022, 1, 1)]);
    }

    #[test]
    fn test_default_range_spans_three_years() {
        let range = DateRange::default();
        assert_eq!(range.start(), date(2022, 1, 1));
        assert_eq!(range.end(), date(2024, 12, 31));
        // 365 + 365 + 366
        assert_eq!(range.day_count(), 1096);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = DateRange::new(date(2022, 1, 2), date(2022, 1, 1));
        assert!(matches!(result, Err(SeriesError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_days_cross_year_boundary() {
        let range = DateRange::from_ymd((2022, 12, 30), (2023, 1, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2022, 12, 30));
        assert_eq!(days[3], date(2023, 1, 2));
        assert_eq!(days[2].ordinal(), 1);
    }

    #[test]
    fn test_from_ymd_invalid_date() {
        let result = DateRange::from_ymd((2023, 2, 29), (2023, 3, 1));
        assert!(matches!(result, Err(SeriesError::DateParse(_))));
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2022-01-01", "2022-01-07").unwrap();
        assert_eq!(range.day_count(), 7);
        assert_eq!(range.to_string(), "2022-01-01..=2022-01-07");

        assert!(matches!(
            DateRange::parse("2022-13-01", "2022-12-31"),
            Err(SeriesError::DateParse(_))
        ));
    }
}
