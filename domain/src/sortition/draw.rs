//! Committee sortition
//!
//! Draws a committee roster uniformly at random without replacement from a
//! snapshot of the active validator pool.

use super::randomness::RandomnessSource;
use crate::core::error::DomainError;
use crate::core::identity::ValidatorId;
use std::collections::HashSet;

/// Draw a roster of `size` distinct validators from `pool`.
///
/// `pool` must be a snapshot of active validators in a stable order (see
/// [`ValidatorRegistry::active_pool`](crate::ValidatorRegistry::active_pool));
/// with a seeded source the result is then reproducible. The draw returned by
/// the source is checked before it is accepted.
pub fn draw_committee(
    pool: &[ValidatorId],
    size: usize,
    source: &dyn RandomnessSource,
) -> Result<Vec<ValidatorId>, DomainError> {
    if size == 0 {
        return Err(DomainError::InvalidCommitteeSize);
    }
    if size > pool.len() {
        return Err(DomainError::InsufficientValidators {
            requested: size,
            available: pool.len(),
        });
    }

    let drawn = source.draw_distinct(size, pool);
    if drawn.len() != size {
        return Err(DomainError::InvalidDraw(format!(
            "expected {} members, got {}",
            size,
            drawn.len()
        )));
    }

    let eligible: HashSet<&ValidatorId> = pool.iter().collect();
    let mut seen = HashSet::with_capacity(size);
    for member in &drawn {
        if !eligible.contains(member) {
            return Err(DomainError::InvalidDraw(format!(
                "{} is not in the eligible pool",
                member
            )));
        }
        if !seen.insert(member) {
            return Err(DomainError::InvalidDraw(format!(
                "{} was drawn twice",
                member
            )));
        }
    }

    Ok(drawn)
}
