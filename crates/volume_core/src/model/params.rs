//! Model parameter set and builder.

use crate::types::{Result, SeriesError, WeeklyProfile};

/// Parameters of the synthetic volume model.
///
/// Immutable once built. Use [`ModelParameters::builder`] to construct
/// validated instances; [`Default`] gives the reference calibration
/// (base 100, slope 0.1/day, yearly amplitude 50, noise σ 15).
///
/// # Examples
///
/// ```rust
/// use volume_core::model::ModelParameters;
/// use volume_core::types::WeeklyProfile;
///
/// let params = ModelParameters::builder()
///     .base_volume(250)
///     .trend_slope(0.05)
///     .yearly_amplitude(30.0)
///     .weekly(WeeklyProfile::flat())
///     .noise_std_dev(0.0)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.base_volume(), 250);
/// assert_eq!(params.noise_std_dev(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModelParameters {
    /// Volume on the first day before seasonality and noise.
    base_volume: i64,
    /// Linear growth in volume per day.
    trend_slope: f64,
    /// Amplitude of the yearly sinusoid.
    yearly_amplitude: f64,
    /// Per-weekday offsets.
    weekly: WeeklyProfile,
    /// Standard deviation of the daily Gaussian noise.
    noise_std_dev: f64,
}

impl ModelParameters {
    /// Creates a builder preloaded with the default parameters.
    #[inline]
    pub fn builder() -> ModelParametersBuilder {
        ModelParametersBuilder::default()
    }

    /// Returns a builder seeded from these parameters.
    pub fn to_builder(&self) -> ModelParametersBuilder {
        ModelParametersBuilder {
            base_volume: self.base_volume,
            trend_slope: self.trend_slope,
            yearly_amplitude: self.yearly_amplitude,
            weekly: self.weekly,
            noise_std_dev: self.noise_std_dev,
        }
    }

    #[inline]
    pub fn base_volume(&self) -> i64 {
        self.base_volume
    }

    #[inline]
    pub fn trend_slope(&self) -> f64 {
        self.trend_slope
    }

    #[inline]
    pub fn yearly_amplitude(&self) -> f64 {
        self.yearly_amplitude
    }

    #[inline]
    pub fn weekly(&self) -> &WeeklyProfile {
        &self.weekly
    }

    #[inline]
    pub fn noise_std_dev(&self) -> f64 {
        self.noise_std_dev
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::InvalidParameter` if:
    /// - `trend_slope`, `yearly_amplitude` or any weekly offset is not finite
    /// - `noise_std_dev` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        ensure_finite("trend_slope", self.trend_slope)?;
        ensure_finite("yearly_amplitude", self.yearly_amplitude)?;
        for (day, offset) in self.weekly.iter() {
            if !offset.is_finite() {
                return Err(SeriesError::invalid_parameter(
                    "weekly_offsets",
                    format!("offset for {} must be finite, got {}", day, offset),
                ));
            }
        }
        ensure_finite("noise_std_dev", self.noise_std_dev)?;
        if self.noise_std_dev < 0.0 {
            return Err(SeriesError::invalid_parameter(
                "noise_std_dev",
                format!("must be non-negative, got {}", self.noise_std_dev),
            ));
        }
        Ok(())
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            base_volume: 100,
            trend_slope: 0.1,
            yearly_amplitude: 50.0,
            weekly: WeeklyProfile::default(),
            noise_std_dev: 15.0,
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SeriesError::invalid_parameter(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Builder for [`ModelParameters`].
///
/// Starts from the default calibration; every setter overrides one field.
/// Validation runs at build time.
#[derive(Clone, Debug)]
pub struct ModelParametersBuilder {
    base_volume: i64,
    trend_slope: f64,
    yearly_amplitude: f64,
    weekly: WeeklyProfile,
    noise_std_dev: f64,
}

impl Default for ModelParametersBuilder {
    fn default() -> Self {
        ModelParameters::default().to_builder()
    }
}

impl ModelParametersBuilder {
    #[inline]
    pub fn base_volume(mut self, base_volume: i64) -> Self {
        self.base_volume = base_volume;
        self
    }

    #[inline]
    pub fn trend_slope(mut self, trend_slope: f64) -> Self {
        self.trend_slope = trend_slope;
        self
    }

    #[inline]
    pub fn yearly_amplitude(mut self, yearly_amplitude: f64) -> Self {
        self.yearly_amplitude = yearly_amplitude;
        self
    }

    #[inline]
    pub fn weekly(mut self, weekly: WeeklyProfile) -> Self {
        self.weekly = weekly;
        self
    }

    /// Sets the noise standard deviation. Zero disables noise.
    #[inline]
    pub fn noise_std_dev(mut self, noise_std_dev: f64) -> Self {
        self.noise_std_dev = noise_std_dev;
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// See [`ModelParameters::validate`].
    pub fn build(self) -> Result<ModelParameters> {
        let params = ModelParameters {
            base_volume: self.base_volume,
            trend_slope: self.trend_slope,
            yearly_amplitude: self.yearly_amplitude,
            weekly: self.weekly,
            noise_std_dev: self.noise_std_dev,
        };

        params.validate()?;
        Ok(params)
    }
}
