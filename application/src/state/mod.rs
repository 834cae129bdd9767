//! Shared engine state.
//!
//! [`CouncilState`] is the explicit handle every use case receives. It owns
//! the validator registry and all committees, and enforces the locking
//! discipline:
//!
//! - the registry sits behind one `RwLock`; sortition holds the read lock
//!   from pool snapshot until the new committee is stored
//! - each committee sits behind its own `Mutex`, so votes on one committee
//!   serialize while other committees proceed in parallel
//! - lock order is registry → committee map → committee; no lock is held
//!   across an `.await`

use crate::config::EngineParams;
use crate::ports::decision_journal::{DecisionJournal, JournalEvent, NoDecisionJournal};
use council_domain::{
    Committee, CommitteeId, DecisionAggregator, DomainError, ValidatorId, ValidatorRegistry,
};
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Committee handle shared between use cases
pub type SharedCommittee = Arc<Mutex<Committee>>;

/// Transactional in-memory state of one engine instance.
///
/// Independent instances share nothing, so tests can run many in parallel.
pub struct CouncilState {
    admin: ValidatorId,
    params: EngineParams,
    aggregator: DecisionAggregator,
    registry: RwLock<ValidatorRegistry>,
    committees: RwLock<HashMap<CommitteeId, SharedCommittee>>,
    next_committee_id: AtomicU64,
    journal: Arc<dyn DecisionJournal>,
}

impl CouncilState {
    /// Create an empty state administered by `admin`
    pub fn new(admin: ValidatorId, params: EngineParams) -> Self {
        Self {
            admin,
            aggregator: params.aggregator(),
            params,
            registry: RwLock::new(ValidatorRegistry::new()),
            committees: RwLock::new(HashMap::new()),
            next_committee_id: AtomicU64::new(1),
            journal: Arc::new(NoDecisionJournal),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn DecisionJournal>) -> Self {
        self.journal = journal;
        self
    }

    pub fn admin(&self) -> &ValidatorId {
        &self.admin
    }

    /// Fail with `Unauthorized` unless `caller` is the administrator
    pub fn ensure_admin(&self, caller: &ValidatorId) -> Result<(), DomainError> {
        if caller == &self.admin {
            Ok(())
        } else {
            Err(DomainError::Unauthorized(caller.clone()))
        }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn aggregator(&self) -> &DecisionAggregator {
        &self.aggregator
    }

    pub fn journal(&self, event: JournalEvent) {
        self.journal.record(event);
    }

    /// Shared read access to the registry
    pub fn registry(&self) -> RwLockReadGuard<'_, ValidatorRegistry> {
        self.registry.read()
    }

    pub(crate) fn registry_mut(&self) -> RwLockWriteGuard<'_, ValidatorRegistry> {
        self.registry.write()
    }

    pub(crate) fn allocate_committee_id(&self) -> CommitteeId {
        CommitteeId::new(self.next_committee_id.fetch_add(1, Ordering::SeqCst))
    }

    pub(crate) fn insert_committee(&self, committee: Committee) {
        self.committees
            .write()
            .insert(committee.id(), Arc::new(Mutex::new(committee)));
    }

    /// Look up a committee handle
    pub fn committee(&self, id: CommitteeId) -> Result<SharedCommittee, DomainError> {
        self.committees
            .read()
            .get(&id)
            .cloned()
            .ok_or(DomainError::UnknownCommittee(id))
    }

    /// Handles of every committee, in no particular order
    pub fn committees(&self) -> Vec<SharedCommittee> {
        self.committees.read().values().cloned().collect()
    }

    pub fn committee_count(&self) -> usize {
        self.committees.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{CommitteeType, current_timestamp};

    fn id(raw: &str) -> ValidatorId {
        ValidatorId::new(raw).unwrap()
    }

    #[test]
    fn test_ensure_admin() {
        let state = CouncilState::new(id("0xadmin"), EngineParams::default());
        assert!(state.ensure_admin(&id("0xADMIN")).is_ok());
        assert_eq!(
            state.ensure_admin(&id("0xmallory")),
            Err(DomainError::Unauthorized(id("0xmallory")))
        );
    }

    #[test]
    fn test_committee_ids_are_sequential() {
        let state = CouncilState::new(id("0xadmin"), EngineParams::default());
        assert_eq!(state.allocate_committee_id(), CommitteeId::new(1));
        assert_eq!(state.allocate_committee_id(), CommitteeId::new(2));
    }

    #[test]
    fn test_insert_and_lookup_committee() {
        let state = CouncilState::new(id("0xadmin"), EngineParams::default());
        let committee_id = state.allocate_committee_id();
        let committee = Committee::new(
            committee_id,
            CommitteeType::Event,
            4,
            vec![id("0xa")],
            current_timestamp(),
        )
        .unwrap();
        state.insert_committee(committee);

        assert_eq!(state.committee_count(), 1);
        assert_eq!(state.committee(committee_id).unwrap().lock().type_id(), 4);
        assert_eq!(
            state.committee(CommitteeId::new(99)).err(),
            Some(DomainError::UnknownCommittee(CommitteeId::new(99)))
        );
    }
}
