//! Validator registry
//!
//! The roster of validators and their role flags. The registry is the only
//! owner of role state; sortition reads a snapshot of its active pool.

use super::entities::{Validator, ValidatorRole};
use crate::core::error::DomainError;
use crate::core::identity::{ProfileRef, ValidatorId};
use std::collections::BTreeMap;

/// Membership roster keyed by identity.
///
/// Backed by a `BTreeMap` so that [`active_pool`](Self::active_pool) is
/// always returned in the same order for the same roster, which keeps seeded
/// sortition reproducible.
///
/// # Example
///
/// ```
/// use council_domain::{ProfileRef, ValidatorId, ValidatorRegistry};
///
/// let mut registry = ValidatorRegistry::new();
/// let alice = ValidatorId::new("0xa11ce").unwrap();
/// registry.register(alice.clone(), ProfileRef::new("bafy-alice")).unwrap();
/// assert!(registry.is_active(&alice));
///
/// registry.revoke(&alice).unwrap();
/// assert_eq!(registry.count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: BTreeMap<ValidatorId, Validator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new active validator
    pub fn register(&mut self, id: ValidatorId, profile: ProfileRef) -> Result<(), DomainError> {
        if self.validators.contains_key(&id) {
            return Err(DomainError::DuplicateValidator(id));
        }
        self.validators
            .insert(id.clone(), Validator::new(id, Some(profile)));
        Ok(())
    }

    /// Revoke a validator's role. Revoking twice is a no-op.
    pub fn revoke(&mut self, id: &ValidatorId) -> Result<(), DomainError> {
        let validator = self
            .validators
            .get_mut(id)
            .ok_or_else(|| DomainError::UnknownValidator(id.clone()))?;
        validator.role = ValidatorRole::Revoked;
        Ok(())
    }

    /// Idempotent activation.
    ///
    /// Inserts the identity if unknown, re-activates it if revoked, and
    /// leaves an active validator untouched. A supplied profile only fills a
    /// missing one. Returns `true` if the role changed.
    pub fn grant_role(&mut self, id: ValidatorId, profile: Option<ProfileRef>) -> bool {
        match self.validators.get_mut(&id) {
            Some(validator) => {
                if validator.profile.is_none() {
                    validator.profile = profile;
                }
                let changed = !validator.is_active();
                validator.role = ValidatorRole::Active;
                changed
            }
            None => {
                self.validators
                    .insert(id.clone(), Validator::new(id, profile));
                true
            }
        }
    }

    /// Number of active validators
    pub fn count(&self) -> usize {
        self.validators.values().filter(|v| v.is_active()).count()
    }

    /// Number of registered validators, revoked ones included
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn is_active(&self, id: &ValidatorId) -> bool {
        self.validators.get(id).is_some_and(|v| v.is_active())
    }

    pub fn get(&self, id: &ValidatorId) -> Option<&Validator> {
        self.validators.get(id)
    }

    /// Profile reference of a registered validator
    pub fn profile(&self, id: &ValidatorId) -> Result<Option<&ProfileRef>, DomainError> {
        self.validators
            .get(id)
            .map(|v| v.profile.as_ref())
            .ok_or_else(|| DomainError::UnknownValidator(id.clone()))
    }

    /// Snapshot of active identities, in identity order
    pub fn active_pool(&self) -> Vec<ValidatorId> {
        self.validators
            .values()
            .filter(|v| v.is_active())
            .map(|v| v.id.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.values()
    }
}
