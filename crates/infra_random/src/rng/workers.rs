//! Per-worker randomizers for parallel heuristics.
//!
//! A single [`Randomizer`] must not be shared between threads without a lock.
//! Instead, each worker receives its own randomizer seeded from one draw of a
//! master instance. Seeds are drawn sequentially up front, so the outcome of a
//! parallel run depends only on the master seed and never on how work is
//! scheduled across threads.
//!
//! # Example
//!
//! ```rust
//! use infra_random::Randomizer;
//!
//! let mut master = Randomizer::from_seed(2024);
//! let workers = master.fork_workers(4);
//! assert_eq!(workers.len(), 4);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::randomizer::Randomizer;
#[cfg(feature = "parallel")]
use crate::error::RandomizeError;

impl Randomizer {
    /// Returns an independent randomizer seeded from one draw of `self`.
    ///
    /// Consumes exactly the draws of one [`new_random_seed`] call.
    ///
    /// [`new_random_seed`]: Randomizer::new_random_seed
    pub fn fork(&mut self) -> Randomizer {
        let seed = self.new_random_seed();
        tracing::trace!(parent_seed = self.seed(), seed, "forked randomizer");
        Randomizer::from_seed(seed)
    }

    /// Returns `count` independent randomizers, one per worker.
    ///
    /// Worker `k` is seeded from the `k`-th seed drawn from `self`.
    pub fn fork_workers(&mut self, count: usize) -> Vec<Randomizer> {
        tracing::debug!(count, parent_seed = self.seed(), "forking worker randomizers");
        (0..count).map(|_| self.fork()).collect()
    }

    /// Shuffles every `chunk_size` block of `data` independently, in parallel.
    ///
    /// Each block gets its own fork, drawn in block order before any work
    /// starts; the trailing block may be shorter. The result is identical to
    /// shuffling the blocks one after another with those forks.
    ///
    /// # Errors
    ///
    /// Returns [`RandomizeError::InvalidShuffleRange`] if `chunk_size` is zero.
    #[cfg(feature = "parallel")]
    pub fn par_shuffle_chunks<T: Send>(
        &mut self,
        data: &mut [T],
        chunk_size: usize,
    ) -> Result<(), RandomizeError> {
        if chunk_size == 0 {
            return Err(RandomizeError::InvalidShuffleRange {
                start: 0,
                end: 0,
                len: data.len(),
            });
        }

        let chunk_count = data.len().div_ceil(chunk_size);
        let mut workers = self.fork_workers(chunk_count);

        data.par_chunks_mut(chunk_size)
            .zip(workers.par_iter_mut())
            .try_for_each(|(chunk, worker)| {
                let len = chunk.len();
                worker.shuffle_prefix(chunk, len)
            })
    }
}
