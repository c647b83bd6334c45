//! Distribution adaptors layered on top of the raw bit source.
//!
//! Each adaptor maps raw generator output to one output shape and carries no
//! state between draws:
//!
//! - [`UniformInclusive`]: integers in `[low, high]` (also the 0/1 coin and the
//!   non-negative seed source)
//! - [`UniformReal`]: reals in `[low, high)`
//! - [`Gaussian`]: normal variates with a given mean and standard deviation
//!
//! All adaptors implement [`rand::distributions::Distribution`] and accept any
//! `rand::Rng`, not only [`Mt19937`](super::Mt19937).
//!
//! Sampling never validates: parameters are checked once, when the adaptor
//! is built.

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::RandomizeError;

/// Uniform integer distribution over an inclusive range.
///
/// One 32-bit word is mapped to the range with the nearly-divisionless
/// widening multiply of Lemire (2019). Words falling into the biased low zone
/// of the product are rejected and redrawn, so the result is exactly uniform.
/// A range spanning all of `i32` uses the raw word.
///
/// # Examples
///
/// ```rust
/// use infra_random::{Mt19937, UniformInclusive};
/// use rand::distributions::Distribution;
///
/// let die = UniformInclusive::new(1, 6).unwrap();
/// let mut gen = Mt19937::new(7);
/// let roll = die.sample(&mut gen);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformInclusive {
    low: i32,
    /// Number of values in the range; zero encodes the full 2^32 span.
    span: u32,
}

impl UniformInclusive {
    /// Creates the distribution over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidIntRange`] if `low > high`.
    pub fn new(low: i32, high: i32) -> Result<Self, RandomizeError> {
        if low > high {
            return Err(RandomizeError::InvalidIntRange { low, high });
        }
        let span = (i64::from(high) - i64::from(low) + 1) as u32;
        Ok(Self { low, span })
    }

    /// The fair 0/1 coin.
    #[inline]
    pub const fn coin() -> Self {
        Self { low: 0, span: 2 }
    }

    /// All non-negative `i32` values, `[0, i32::MAX]`.
    #[inline]
    pub const fn non_negative() -> Self {
        Self {
            low: 0,
            span: 1 << 31,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn high(&self) -> i32 {
        self.low.wrapping_add(self.span.wrapping_sub(1) as i32)
    }
}

impl Distribution<i32> for UniformInclusive {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.span == 0 {
            return self.low.wrapping_add(rng.next_u32() as i32);
        }

        let span = u64::from(self.span);
        let mut product = u64::from(rng.next_u32()) * span;
        let mut low_bits = product as u32;
        if low_bits < self.span {
            let threshold = self.span.wrapping_neg() % self.span;
            while low_bits < threshold {
                product = u64::from(rng.next_u32()) * span;
                low_bits = product as u32;
            }
        }
        self.low.wrapping_add((product >> 32) as u32 as i32)
    }
}

/// Uniform real distribution over a half-open range `[low, high)`.
///
/// Each draw takes one 53-bit canonical variate `u` in `[0, 1)` and scales it
/// onto the range. A result that rounds up to `high` is replaced by the
/// largest `f64` below `high`, so ranges only a few ULPs wide stay half-open.
/// A degenerate range (`low == high`) always yields `low` and draws nothing
/// from the generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformReal {
    low: f64,
    high: f64,
}

impl UniformReal {
    /// Creates the distribution over `[low, high)`.
    ///
    /// Any pair of finite bounds with `low <= high` is accepted, including
    /// ranges whose width exceeds `f64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidFloatRange`] if either bound is not
    /// finite or if `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, RandomizeError> {
        if !(low.is_finite() && high.is_finite()) || low > high {
            return Err(RandomizeError::InvalidFloatRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The unit interval `[0, 1)`.
    #[inline]
    pub const fn unit() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

impl Distribution<f64> for UniformReal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.low == self.high {
            return self.low;
        }

        let u: f64 = rng.gen();
        let width = self.high - self.low;
        let value = if width.is_finite() {
            self.low + width * u
        } else {
            self.low * (1.0 - u) + self.high * u
        };

        if value < self.high {
            value.max(self.low)
        } else {
            next_below(self.high)
        }
    }
}

/// Largest finite `f64` strictly below the finite value `x`.
fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Normal distribution with explicit mean and standard deviation.
///
/// Standard normal variates come from the Ziggurat sampler of `rand_distr`
/// and are scaled by `std_dev` and shifted by `mean`. The scaled value is
/// not clamped: with `std_dev` or `mean` near `f64::MAX` a sample can
/// overflow to `±inf`. It is never NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
}

impl Gaussian {
    /// Creates `N(mean, std_dev^2)`.
    ///
    /// # Errors
    ///
    /// - [`RandomizeError::InvalidMean`] if `mean` is not finite
    /// - [`RandomizeError::InvalidStdDev`] if `std_dev` is not finite and
    ///   strictly positive
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, RandomizeError> {
        if !mean.is_finite() {
            return Err(RandomizeError::InvalidMean(mean));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(RandomizeError::InvalidStdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal distribution `N(0, 1)`.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Returns the mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for Gaussian {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        self.mean + self.std_dev * z
    }
}
