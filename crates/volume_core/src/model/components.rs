//! Additive components of the daily volume signal.
//!
//! Each function evaluates one term for a single day. They are free of side
//! effects; noise is drawn by the generator, not here.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use crate::types::WeeklyProfile;

/// Period of the yearly cycle in days.
pub const YEAR_LENGTH_DAYS: f64 = 365.25;

/// Phase shift of the yearly cycle, as a fraction of a year.
pub const YEARLY_PHASE_SHIFT: f64 = 0.25;

/// Linear trend at day index `index` (zero on the first day).
#[inline]
pub fn trend_component(index: usize, slope: f64) -> f64 {
    index as f64 * slope
}

/// Yearly seasonality for `date`.
///
/// `amplitude * sin(2π * (day_of_year / 365.25 - 0.25))`, with
/// `day_of_year` counted from 1 on January 1st.
///
/// ```
/// use chrono::NaiveDate;
/// use volume_core::model::yearly_component;
///
/// // Day 1 sits just past the trough at sin(-π/2)
/// let jan1 = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// assert!(yearly_component(jan1, 50.0) < -49.9);
/// ```
#[inline]
pub fn yearly_component(date: NaiveDate, amplitude: f64) -> f64 {
    let day_of_year = f64::from(date.ordinal());
    amplitude * (2.0 * PI * (day_of_year / YEAR_LENGTH_DAYS - YEARLY_PHASE_SHIFT)).sin()
}

/// Weekly seasonality for `date`.
#[inline]
pub fn weekly_component(date: NaiveDate, profile: &WeeklyProfile) -> f64 {
    profile.offset(date.weekday())
}

/// Clamps a raw volume at zero and truncates it toward zero.
///
/// Truncation matches a direct float-to-integer cast; values are never
/// rounded. NaN maps to zero.
///
/// ```
/// use volume_core::model::clamp_volume;
///
/// assert_eq!(clamp_volume(104.99), 104);
/// assert_eq!(clamp_volume(-3.2), 0);
/// ```
#[inline]
pub fn clamp_volume(raw: f64) -> u64 {
    // `as` saturates and maps NaN to 0
    raw.max(0.0) as u64
}
