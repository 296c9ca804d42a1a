//! Move selector - bounded uniform random sampling without replacement

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks bounded random subsets of move candidates.
///
/// The generator is owned per instance and guarded by a mutex, so
/// concurrent pipelines sharing one selector never race on RNG state and
/// tests can seed a deterministic sequence.
pub struct MoveSelector {
    rng: Mutex<StdRng>,
}

impl MoveSelector {
    /// Selector seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Deterministic selector for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Up to `count` distinct entries chosen uniformly without replacement.
    ///
    /// Returns all entries when the pool is smaller than `count`, and an
    /// empty vec for an empty pool. The caller's slice is never mutated;
    /// sampling shuffles an internal copy of the indices only.
    pub fn pick<T: Clone>(&self, pool: &[T], count: usize) -> Vec<T> {
        let mut rng = self.rng.lock().expect("move selector rng poisoned");
        pool.choose_multiple(&mut *rng, count).cloned().collect()
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}
