//! # Noise Random Number Generation
//!
//! Seedable random source for the daily noise term.
//!
//! Every run has a seed, even when none is requested: [`SeriesRng::from_entropy`]
//! draws one from the thread RNG and keeps it, so it can be logged and the
//! series regenerated exactly.
//!
//! ```rust
//! use rand::Rng;
//! use volume_core::rng::SeriesRng;
//!
//! let mut a = SeriesRng::from_seed(12345);
//! let mut b = SeriesRng::from_seed(12345);
//! assert_eq!(a.gen::<u64>(), b.gen::<u64>());
//! ```

mod prng;

pub use prng::SeriesRng;
