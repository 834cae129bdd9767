//! Manage Validators use case
//!
//! Registry operations. Mutations (`register`, `revoke`, `grant_role`) are
//! administrative and gated on the configured admin identity; reads are open.

use crate::ports::decision_journal::JournalEvent;
use crate::state::CouncilState;
use council_domain::{DomainError, ProfileRef, Validator, ValidatorId};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Use case for validator registry operations
pub struct ManageValidatorsUseCase {
    state: Arc<CouncilState>,
}

impl ManageValidatorsUseCase {
    pub fn new(state: Arc<CouncilState>) -> Self {
        Self { state }
    }

    /// Register a new active validator (admin only)
    pub fn register(
        &self,
        caller: &ValidatorId,
        validator: ValidatorId,
        profile: ProfileRef,
    ) -> Result<(), DomainError> {
        self.state.ensure_admin(caller)?;
        self.state
            .registry_mut()
            .register(validator.clone(), profile.clone())?;

        info!("Registered validator {}", validator);
        self.state.journal(JournalEvent::new(
            "validator_registered",
            json!({ "validator": validator, "profile": profile }),
        ));
        Ok(())
    }

    /// Revoke a validator (admin only).
    ///
    /// Only future committees are affected; existing rosters and ballots are
    /// left as they are.
    pub fn revoke(&self, caller: &ValidatorId, validator: &ValidatorId) -> Result<(), DomainError> {
        self.state.ensure_admin(caller)?;
        self.state.registry_mut().revoke(validator)?;

        info!("Revoked validator {}", validator);
        self.state.journal(JournalEvent::new(
            "validator_revoked",
            json!({ "validator": validator }),
        ));
        Ok(())
    }

    /// Idempotent activation (admin only). Returns `true` if the role changed.
    pub fn grant_role(
        &self,
        caller: &ValidatorId,
        validator: ValidatorId,
        profile: Option<ProfileRef>,
    ) -> Result<bool, DomainError> {
        self.state.ensure_admin(caller)?;
        Ok(grant_role(&self.state, validator, profile))
    }

    /// Number of active validators
    pub fn count(&self) -> usize {
        self.state.registry().count()
    }

    pub fn is_active(&self, validator: &ValidatorId) -> bool {
        self.state.registry().is_active(validator)
    }

    /// Profile reference of a registered validator
    pub fn profile(&self, validator: &ValidatorId) -> Result<Option<ProfileRef>, DomainError> {
        self.state.registry().profile(validator).map(|p| p.cloned())
    }

    /// All registered validators, revoked ones included, in identity order
    pub fn list(&self) -> Vec<Validator> {
        self.state.registry().iter().cloned().collect()
    }
}

/// Activation shared by the admin path and validator-application settlement
pub(crate) fn grant_role(
    state: &CouncilState,
    validator: ValidatorId,
    profile: Option<ProfileRef>,
) -> bool {
    let changed = state
        .registry_mut()
        .grant_role(validator.clone(), profile);
    if changed {
        info!("Granted validator role to {}", validator);
        state.journal(JournalEvent::new(
            "validator_role_granted",
            json!({ "validator": validator }),
        ));
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineParams;

    fn id(raw: &str) -> ValidatorId {
        ValidatorId::new(raw).unwrap()
    }

    fn use_case() -> ManageValidatorsUseCase {
        let state = Arc::new(CouncilState::new(id("0xadmin"), EngineParams::default()));
        ManageValidatorsUseCase::new(state)
    }

    #[test]
    fn test_admin_registers_and_revokes() {
        let validators = use_case();
        let admin = id("0xadmin");

        validators
            .register(&admin, id("0xa"), ProfileRef::new("cid-a"))
            .unwrap();
        validators
            .register(&admin, id("0xb"), ProfileRef::new("cid-b"))
            .unwrap();
        assert_eq!(validators.count(), 2);

        validators.revoke(&admin, &id("0xa")).unwrap();
        assert_eq!(validators.count(), 1);
        assert!(!validators.is_active(&id("0xa")));
        assert_eq!(validators.list().len(), 2);
    }

    #[test]
    fn test_non_admin_is_unauthorized() {
        let validators = use_case();
        let mallory = id("0xmallory");

        assert_eq!(
            validators.register(&mallory, id("0xa"), ProfileRef::new("cid")),
            Err(DomainError::Unauthorized(mallory.clone()))
        );
        assert_eq!(
            validators.revoke(&mallory, &id("0xa")),
            Err(DomainError::Unauthorized(mallory.clone()))
        );
        assert_eq!(
            validators.grant_role(&mallory, id("0xa"), None),
            Err(DomainError::Unauthorized(mallory))
        );
        assert_eq!(validators.count(), 0);
    }

    #[test]
    fn test_registry_errors_pass_through() {
        let validators = use_case();
        let admin = id("0xadmin");

        validators
            .register(&admin, id("0xa"), ProfileRef::new("cid"))
            .unwrap();
        assert_eq!(
            validators.register(&admin, id("0xa"), ProfileRef::new("cid")),
            Err(DomainError::DuplicateValidator(id("0xa")))
        );
        assert_eq!(
            validators.revoke(&admin, &id("0xghost")),
            Err(DomainError::UnknownValidator(id("0xghost")))
        );
    }

    #[test]
    fn test_grant_role_and_profile() {
        let validators = use_case();
        let admin = id("0xadmin");

        assert_eq!(
            validators.grant_role(&admin, id("0xnew"), Some(ProfileRef::new("cid-new"))),
            Ok(true)
        );
        assert_eq!(validators.grant_role(&admin, id("0xnew"), None), Ok(false));
        assert_eq!(
            validators.profile(&id("0xnew")),
            Ok(Some(ProfileRef::new("cid-new")))
        );
        assert!(validators.profile(&id("0xghost")).is_err());
    }
}
