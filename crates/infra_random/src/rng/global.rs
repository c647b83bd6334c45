//! Process-wide randomizer instance.
//!
//! Some call sites have no handle to thread a [`Randomizer`] through. They can
//! share one lazily created instance via [`Randomizer::instance`]. Access is
//! serialised by a mutex, so all users observe a single ordered sequence of
//! draws.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::randomizer::Randomizer;

static INSTANCE: Lazy<Mutex<Randomizer>> = Lazy::new(|| Mutex::new(Randomizer::new()));

impl Randomizer {
    /// Returns the process-wide randomizer, creating it on first access.
    ///
    /// The instance starts in the default state and lives for the rest of the
    /// process; [`set_seed`](Randomizer::set_seed) replaces its generator state
    /// without replacing the instance. Hold the guard only for the draws that
    /// belong together: other threads block until it is dropped.
    ///
    /// A panic while the guard was held does not disable the instance; the
    /// generator state at that point is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infra_random::Randomizer;
    ///
    /// Randomizer::instance().set_seed(11);
    /// let coin = Randomizer::instance().flip_coin();
    /// let _ = coin;
    /// ```
    pub fn instance() -> MutexGuard<'static, Randomizer> {
        INSTANCE.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The instance is shared by every test in this binary, so only
    // identity and relative behaviour are asserted here.
    #[test]
    fn test_instance_is_shared() {
        let first = {
            let guard = Randomizer::instance();
            &*guard as *const Randomizer
        };
        let second = {
            let guard = Randomizer::instance();
            &*guard as *const Randomizer
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_instance_reseed_is_reproducible() {
        let mut rng = Randomizer::instance();
        rng.set_seed(42);
        let first: Vec<i32> = (0..10).map(|_| rng.get_random_int(0, 100).unwrap()).collect();
        rng.set_seed(42);
        let second: Vec<i32> = (0..10).map(|_| rng.get_random_int(0, 100).unwrap()).collect();

        assert_eq!(first, second);
        assert_eq!(rng.seed(), 42);
    }
}
