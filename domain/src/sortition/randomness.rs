//! Randomness capability used by sortition
//!
//! The engine never generates randomness itself; it is handed a
//! [`RandomnessSource`]. Tests and reproducible runs use
//! [`SeededRandomness`]; production adapters supply an entropy-backed source.

use crate::core::identity::ValidatorId;
use rand::SeedableRng;
use rand::rngs::StdRng;
use parking_lot::Mutex;
use rand::seq::SliceRandom;

/// Source of uniformly random draws without replacement.
pub trait RandomnessSource: Send + Sync {
    /// Draw `k` distinct entries from `pool`.
    ///
    /// Implementations must return exactly `k` distinct elements of `pool`
    /// when `k <= pool.len()`. Callers validate the result.
    fn draw_distinct(&self, k: usize, pool: &[ValidatorId]) -> Vec<ValidatorId>;
}

/// Deterministic source: the same seed and the same sequence of pools yield
/// the same draws.
///
/// # Example
///
/// ```
/// use council_domain::{RandomnessSource, SeededRandomness, ValidatorId};
///
/// let pool: Vec<ValidatorId> = (0..10)
///     .map(|i| ValidatorId::new(format!("0x{i}")).unwrap())
///     .collect();
///
/// let a = SeededRandomness::new(42).draw_distinct(3, &pool);
/// let b = SeededRandomness::new(42).draw_distinct(3, &pool);
/// assert_eq!(a, b);
/// ```
pub struct SeededRandomness {
    rng: Mutex<StdRng>,
}

impl SeededRandomness {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomnessSource for SeededRandomness {
    fn draw_distinct(&self, k: usize, pool: &[ValidatorId]) -> Vec<ValidatorId> {
        let mut rng = self.rng.lock();
        pool.choose_multiple(&mut *rng, k).cloned().collect()
    }
}
