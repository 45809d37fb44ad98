//! Per-weekday seasonal offsets.

use chrono::Weekday;
use std::collections::BTreeMap;

use super::error::{Result, SeriesError};

/// Weekdays in ISO order, Monday first.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Additive volume offset for each day of the week.
///
/// Stored as a fixed table indexed by `Weekday::num_days_from_monday`, so
/// every weekday always has an offset.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use volume_core::types::WeeklyProfile;
///
/// let profile = WeeklyProfile::default();
/// assert_eq!(profile.offset(Weekday::Mon), 20.0);
/// assert_eq!(profile.offset(Weekday::Sat), -20.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeeklyProfile {
    offsets: [f64; 7],
}

impl WeeklyProfile {
    /// Creates a profile from offsets ordered Monday through Sunday.
    #[inline]
    pub const fn new(offsets: [f64; 7]) -> Self {
        Self { offsets }
    }

    /// Profile with every offset at zero.
    #[inline]
    pub const fn flat() -> Self {
        Self::new([0.0; 7])
    }

    /// Builds a profile from a map keyed by weekday name.
    ///
    /// Keys are parsed case-insensitively as either short (`mon`) or full
    /// (`monday`) English names.
    ///
    /// # Errors
    ///
    /// - `SeriesError::InvalidParameter` for a key that is not a weekday
    ///   or a weekday named twice
    /// - `SeriesError::UnmappedWeekday` for the first weekday left without
    ///   an offset
    pub fn from_named(named: &BTreeMap<String, f64>) -> Result<Self> {
        let mut slots: [Option<f64>; 7] = [None; 7];

        for (key, &offset) in named {
            let day: Weekday = key.trim().parse().map_err(|_| {
                SeriesError::invalid_parameter(
                    "weekly_offsets",
                    format!("'{}' is not a weekday", key),
                )
            })?;
            let slot = &mut slots[day.num_days_from_monday() as usize];
            if slot.is_some() {
                return Err(SeriesError::invalid_parameter(
                    "weekly_offsets",
                    format!("{} is configured more than once", day),
                ));
            }
            *slot = Some(offset);
        }

        let mut offsets = [0.0; 7];
        for (day, slot) in WEEK.iter().zip(slots) {
            offsets[day.num_days_from_monday() as usize] =
                slot.ok_or(SeriesError::UnmappedWeekday(*day))?;
        }
        Ok(Self::new(offsets))
    }

    /// Offset applied on `day`.
    #[inline]
    pub fn offset(&self, day: Weekday) -> f64 {
        self.offsets[day.num_days_from_monday() as usize]
    }

    /// Offsets ordered Monday through Sunday.
    #[inline]
    pub fn as_array(&self) -> &[f64; 7] {
        &self.offsets
    }

    /// Iterates `(weekday, offset)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        WEEK.iter().map(move |&day| (day, self.offset(day)))
    }
}

impl Default for WeeklyProfile {
    /// Monday peak, mid-week dip, weekend low.
    fn default() -> Self {
        Self::new([20.0, 15.0, 5.0, -10.0, 10.0, -20.0, -15.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_default_offsets() {
        let profile = WeeklyProfile::default();
        let expected = [
            (Weekday::Mon, 20.0),
            (Weekday::Tue, 15.0),
            (Weekday::Wed, 5.0),
            (Weekday::Thu, -10.0),
            (Weekday::Fri, 10.0),
            (Weekday::Sat, -20.0),
            (Weekday::Sun, -15.0),
        ];
        assert_eq!(profile.iter().collect::<Vec<_>>(), expected.to_vec());
    }

    #[test]
    fn test_from_named_short_and_full_names() {
        let map = named(&[
            ("mon", 1.0),
            ("Tuesday", 2.0),
            ("wed", 3.0),
            ("THU", 4.0),
            ("friday", 5.0),
            ("sat", 6.0),
            ("sun", 7.0),
        ]);
        let profile = WeeklyProfile::from_named(&map).unwrap();
        assert_eq!(profile.as_array(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_from_named_missing_weekday() {
        let map = named(&[
            ("mon", 20.0),
            ("tue", 15.0),
            ("wed", 5.0),
            ("thu", -10.0),
            ("fri", 10.0),
            ("sun", -15.0),
        ]);
        let result = WeeklyProfile::from_named(&map);
        assert!(matches!(
            result,
            Err(SeriesError::UnmappedWeekday(Weekday::Sat))
        ));
    }

    #[test]
    fn test_from_named_unknown_key() {
        let map = named(&[("funday", 1.0)]);
        let result = WeeklyProfile::from_named(&map);
        assert!(matches!(
            result,
            Err(SeriesError::InvalidParameter {
                name: "weekly_offsets",
                ..
            })
        ));
    }

    #[test]
    fn test_from_named_duplicate_day() {
        let map = named(&[("mon", 1.0), ("monday", 2.0)]);
        let result = WeeklyProfile::from_named(&map);
        match result {
            Err(SeriesError::InvalidParameter { value, .. }) => {
                assert!(value.contains("more than once"))
            }
            other => panic!("Expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_profile() {
        assert!(WeeklyProfile::flat().iter().all(|(_, v)| v == 0.0));
    }
}
