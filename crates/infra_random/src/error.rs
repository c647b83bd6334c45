//! Error types for the randomizer.
//!
//! Every range-based sampling and shuffling operation validates its
//! arguments and reports a [`RandomizeError`] instead of sampling from an
//! ill-formed range. A failed call never advances the generator.

use thiserror::Error;

/// Errors reported by [`Randomizer`](crate::Randomizer) operations.
///
/// # Examples
///
/// ```
/// use infra_random::RandomizeError;
///
/// let err = RandomizeError::InvalidIntRange { low: 5, high: 1 };
/// assert!(err.to_string().contains("low 5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomizeError {
    /// Lower bound of an inclusive integer range exceeds the upper bound.
    #[error("Invalid integer range [{low}, {high}]: low {low} exceeds high {high}")]
    InvalidIntRange {
        /// Requested lower bound
        low: i32,
        /// Requested upper bound
        high: i32,
    },

    /// Real range is reversed or not finite.
    #[error("Invalid float range [{low}, {high}): bounds must be finite with low <= high")]
    InvalidFloatRange {
        /// Requested lower bound
        low: f64,
        /// Requested upper bound
        high: f64,
    },

    /// Mean of a normal distribution is not finite.
    #[error("Invalid mean {0}: must be finite")]
    InvalidMean(f64),

    /// Standard deviation of a normal distribution is not finite and positive.
    #[error("Invalid standard deviation {0}: must be finite and positive")]
    InvalidStdDev(f64),

    /// Shuffle range does not lie within the sequence.
    #[error("Invalid shuffle range [{start}, {end}) for sequence of length {len}")]
    InvalidShuffleRange {
        /// First index of the range
        start: usize,
        /// One past the last index of the range
        end: usize,
        /// Length of the sequence
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomize_error_display() {
        let err = RandomizeError::InvalidIntRange { low: 3, high: -2 };
        assert!(err.to_string().contains("[3, -2]"));

        let err = RandomizeError::InvalidFloatRange {
            low: 1.0,
            high: f64::NAN,
        };
        assert!(err.to_string().contains("NaN"));

        let err = RandomizeError::InvalidStdDev(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = RandomizeError::InvalidShuffleRange {
            start: 4,
            end: 2,
            len: 10,
        };
        assert!(err.to_string().contains("[4, 2)"));
        assert!(err.to_string().contains("length 10"));
    }
}
