//! Seedable randomizer driving randomised optimisation heuristics.
//!
//! This module provides [`Randomizer`], which owns one [`Mt19937`] bit source
//! and the fixed-parameter distribution adaptors layered on top of it. Every
//! draw goes through the single generator, so the sequence of results is
//! fully determined by the seed and the order of calls.

use rand::distributions::Distribution;
use rand::seq::SliceRandom;

use super::distributions::{Gaussian, UniformInclusive, UniformReal};
use super::mt19937::{Mt19937, MT19937_DEFAULT_SEED};
use crate::error::RandomizeError;

/// Seed reported by a randomizer that was never explicitly seeded.
///
/// `-1` is also a valid seed. After `set_seed(-1)`, [`Randomizer::seed`]
/// reports `DEFAULT_SEED` as well, but the generator is in the state for
/// `u32::MAX`, not the default-constructed MT19937 state. Compare generator
/// output rather than `seed()` to tell the two apart.
pub const DEFAULT_SEED: i32 = -1;

/// Pseudo-random sampling and shuffling facility.
///
/// A `Randomizer` is an explicit value: construct it once, seed it from the
/// run configuration and hand `&mut Randomizer` to every consumer that needs
/// randomness. For code paths that cannot thread a handle through,
/// [`Randomizer::instance`] provides one process-wide instance.
///
/// # Examples
///
/// ```rust
/// use infra_random::Randomizer;
///
/// let mut rng = Randomizer::from_seed(7);
/// let draws: Vec<i32> = (0..3).map(|_| rng.get_random_int(0, 9).unwrap()).collect();
/// assert_eq!(draws, vec![0, 2, 7]);
///
/// let mut order = vec![1, 2, 3, 4, 5];
/// rng.shuffle_prefix(&mut order, 3).unwrap();
/// assert_eq!(&order[3..], &[4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct Randomizer {
    /// Last seed applied, or [`DEFAULT_SEED`].
    seed: i32,
    /// The underlying bit source.
    generator: Mt19937,
    /// Fair 0/1 coin.
    coin: UniformInclusive,
    /// Non-negative seeds for other generators.
    seed_source: UniformInclusive,
}

impl Randomizer {
    /// Creates a randomizer in the default-constructed state.
    ///
    /// The generator starts from the canonical MT19937 default seed and
    /// [`seed`](Self::seed) reports [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            generator: Mt19937::new(MT19937_DEFAULT_SEED),
            coin: UniformInclusive::coin(),
            seed_source: UniformInclusive::non_negative(),
        }
    }

    /// Creates a randomizer initialised with `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infra_random::Randomizer;
    ///
    /// let mut a = Randomizer::from_seed(42);
    /// let mut b = Randomizer::from_seed(42);
    /// assert_eq!(a.new_random_seed(), b.new_random_seed());
    /// ```
    pub fn from_seed(seed: i32) -> Self {
        let mut randomizer = Self::new();
        randomizer.set_seed(seed);
        randomizer
    }

    /// Returns the last seed applied, or [`DEFAULT_SEED`] if never seeded.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Re-initialises the generator from `seed` and records it.
    ///
    /// Draws taken before the call are unaffected; every later draw follows
    /// the sequence of a freshly seeded generator. Negative seeds are
    /// reinterpreted as their two's-complement `u32` value.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
        self.generator.reseed(seed as u32);
        tracing::debug!(seed, "randomizer reseeded");
    }

    /// Returns a uniformly chosen boolean. Consumes at least one draw.
    #[inline]
    pub fn flip_coin(&mut self) -> bool {
        self.coin.sample(&mut self.generator) == 1
    }

    /// Returns a uniformly chosen value in `[0, i32::MAX]`, suitable as the
    /// seed of a different generator instance.
    #[inline]
    pub fn new_random_seed(&mut self) -> i32 {
        self.seed_source.sample(&mut self.generator)
    }

    /// Returns a value uniformly distributed over the inclusive range
    /// `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidIntRange`] if `low > high`; the
    /// generator is not advanced.
    pub fn get_random_int(&mut self, low: i32, high: i32) -> Result<i32, RandomizeError> {
        let dist = UniformInclusive::new(low, high)?;
        Ok(dist.sample(&mut self.generator))
    }

    /// Returns a value uniformly distributed over the half-open range
    /// `[low, high)`.
    ///
    /// Consumes one 64-bit draw. `get_random_float(x, x)` returns `x`
    /// without drawing.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidFloatRange`] if `low > high` or
    /// either bound is not finite.
    pub fn get_random_float(&mut self, low: f64, high: f64) -> Result<f64, RandomizeError> {
        let dist = UniformReal::new(low, high)?;
        Ok(dist.sample(&mut self.generator))
    }

    /// Returns a sample from the normal distribution `N(mean, std_dev^2)`.
    ///
    /// The result can overflow to `±inf` when `mean` or `std_dev` is close to
    /// `f64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidMean`] or
    /// [`RandomizeError::InvalidStdDev`] for non-finite or non-positive
    /// parameters.
    pub fn get_normal_distributed_float(
        &mut self,
        mean: f64,
        std_dev: f64,
    ) -> Result<f64, RandomizeError> {
        let dist = Gaussian::new(mean, std_dev)?;
        Ok(dist.sample(&mut self.generator))
    }

    /// Shuffles the first `num_elements` entries of `sequence` in place.
    ///
    /// Entries from `num_elements` onwards are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidShuffleRange`] if `num_elements`
    /// exceeds the length of `sequence`.
    pub fn shuffle_prefix<T>(
        &mut self,
        sequence: &mut [T],
        num_elements: usize,
    ) -> Result<(), RandomizeError> {
        self.shuffle_range(sequence, 0, num_elements)
    }

    /// Shuffles the half-open sub-range `[i, j)` of `sequence` in place.
    ///
    /// Uses a Fisher–Yates shuffle driven by the shared generator; entries
    /// outside the range are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidShuffleRange`] unless
    /// `i <= j <= sequence.len()`.
    pub fn shuffle_range<T>(
        &mut self,
        sequence: &mut [T],
        i: usize,
        j: usize,
    ) -> Result<(), RandomizeError> {
        let len = sequence.len();
        let range = sequence
            .get_mut(i..j)
            .ok_or(RandomizeError::InvalidShuffleRange { start: i, end: j, len })?;
        range.shuffle(&mut self.generator);
        Ok(())
    }

    /// Exposes the underlying generator.
    ///
    /// The handle implements [`rand_core::RngCore`], so it can drive any
    /// `rand` algorithm directly while sharing this randomizer's state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infra_random::Randomizer;
    /// use rand::Rng;
    ///
    /// let mut rng = Randomizer::from_seed(1);
    /// let byte: u8 = rng.generator().gen();
    /// let _ = byte;
    /// ```
    #[inline]
    pub fn generator(&mut self) -> &mut Mt19937 {
        &mut self.generator
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}
