//! # Random Number Generation Infrastructure
//!
//! This module provides the random number facility used by randomised
//! optimisation heuristics: tie-breaking, shuffling of work lists and
//! stochastic perturbation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the same seed and the same call order always produce
//!   the same draws
//! - **Portability**: the bit source is the standard 32-bit Mersenne Twister
//!   and integer ranges use a documented mapping, so golden values carry over
//!   to other implementations
//! - **Explicit ownership**: a [`Randomizer`] is a value passed to consumers;
//!   the process-wide [`Randomizer::instance`] is available where a handle
//!   cannot be threaded through
//! - **Parallel use**: workers receive forks seeded from one master draw
//!
//! ## Module Structure
//!
//! - [`mt19937`]: the MT19937 bit source
//! - [`distributions`]: integer, real and normal adaptors
//! - `randomizer`: the [`Randomizer`] facade
//! - `global`: the process-wide instance
//! - `workers`: per-worker forks and parallel chunk shuffling
//!
//! ## Usage Example
//!
//! ```rust
//! use infra_random::rng::Randomizer;
//!
//! let mut rng = Randomizer::from_seed(12345);
//!
//! let pick = rng.get_random_int(0, 9).unwrap();
//! let weight = rng.get_random_float(0.5, 1.5).unwrap();
//! let noise = rng.get_normal_distributed_float(0.0, 0.1).unwrap();
//!
//! let mut work_list: Vec<usize> = (0..100).collect();
//! rng.shuffle_range(&mut work_list, 10, 90).unwrap();
//! # let _ = (pick, weight, noise);
//! ```

pub mod distributions;
mod global;
pub mod mt19937;
mod randomizer;
mod workers;

// Public re-exports
pub use distributions::{Gaussian, UniformInclusive, UniformReal};
pub use mt19937::{Mt19937, MT19937_DEFAULT_SEED};
pub use randomizer::{Randomizer, DEFAULT_SEED};
