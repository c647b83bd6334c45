//! # Infra Random (Layer I: Foundation)
//!
//! ## Role
//!
//! infra_random provides the pseudo-random number facility for randomised
//! optimisation heuristics:
//! - Seedable 32-bit Mersenne Twister bit source ([`Mt19937`])
//! - The [`Randomizer`] facade: coin flips, fresh seeds, integer / real /
//!   normal sampling and in-place partial shuffles
//! - A process-wide instance for call sites without a handle
//! - Per-worker forks for parallel heuristics
//! - Layered configuration of the run seed ([`config`])
//!
//! ## Reproducibility
//!
//! The same seed and the same order of calls always yield the same draws.
//! Integer sampling maps each 32-bit word with the nearly-divisionless
//! multiply-shift method, so the sequence for a given seed is portable:
//!
//! ```rust
//! use infra_random::Randomizer;
//!
//! let mut rng = Randomizer::from_seed(7);
//! assert_eq!(rng.get_random_int(0, 9), Ok(0));
//! assert_eq!(rng.get_random_int(0, 9), Ok(2));
//! assert_eq!(rng.get_random_int(0, 9), Ok(7));
//! ```
//!
//! ## Error Handling
//!
//! Range arguments are validated. Ill-formed ranges are reported as
//! [`RandomizeError`] and leave the generator untouched.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): [`Randomizer::par_shuffle_chunks`] via Rayon

pub mod config;
pub mod error;
pub mod rng;

pub use error::RandomizeError;
pub use rng::{
    Gaussian, Mt19937, Randomizer, UniformInclusive, UniformReal, DEFAULT_SEED,
    MT19937_DEFAULT_SEED,
};
