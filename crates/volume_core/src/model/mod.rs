//! Series model: parameters and additive components.
//!
//! Daily volume is
//!
//! ```text
//! raw(i)    = base + trend(i) + yearly(date_i) + weekly(date_i) + noise_i
//! volume(i) = trunc(max(0, raw(i)))
//! ```
//!
//! - [`ModelParameters`]: validated, immutable parameter set
//! - [`components`]: the pure per-day component functions

pub mod components;
mod params;

pub use components::{
    clamp_volume, trend_component, weekly_component, yearly_component, YEAR_LENGTH_DAYS,
    YEARLY_PHASE_SHIFT,
};
pub use params::{ModelParameters, ModelParametersBuilder};
