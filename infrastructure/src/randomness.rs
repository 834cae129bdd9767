//! Randomness source adapters

use council_domain::{RandomnessSource, ValidatorId};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// Production randomness source using OS entropy.
///
/// Draws are not reproducible; use
/// [`SeededRandomness`](council_domain::SeededRandomness) when they must be.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomness;

impl RandomnessSource for OsRandomness {
    fn draw_distinct(&self, k: usize, pool: &[ValidatorId]) -> Vec<ValidatorId> {
        pool.choose_multiple(&mut OsRng, k).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::draw_committee;
    use std::collections::HashSet;

    #[test]
    fn test_os_draw_is_distinct_subset() {
        let pool: Vec<ValidatorId> = (0..10)
            .map(|i| ValidatorId::new(format!("0xv{}", i)).unwrap())
            .collect();

        for size in [1, 5, 10] {
            let members = draw_committee(&pool, size, &OsRandomness).unwrap();
            let unique: HashSet<_> = members.iter().collect();
            assert_eq!(unique.len(), size);
            assert!(members.iter().all(|m| pool.contains(m)));
        }
    }
}
