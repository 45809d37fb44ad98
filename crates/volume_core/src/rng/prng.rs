//! Seeded PRNG wrapper for series noise.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded random number generator for noise sampling.
///
/// Wraps [`StdRng`] and remembers the seed it was initialised with.
/// Implements [`RngCore`], so it can be passed anywhere a `rand::Rng` is
/// expected.
///
/// # Examples
///
/// ```rust
/// use volume_core::rng::SeriesRng;
///
/// let rng = SeriesRng::from_seed(42);
/// assert_eq!(rng.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SeriesRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl SeriesRng {
    /// Creates a generator initialised with `seed`.
    ///
    /// The same seed always produces the same sequence.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a freshly drawn seed.
    ///
    /// The seed comes from the thread-local RNG and is retained, see
    /// [`SeriesRng::seed`].
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SeriesRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
