//! Get Decision use case

use crate::state::CouncilState;
use council_domain::{CommitteeId, DecisionRecord, DomainError, ValidatorId};
use std::sync::Arc;

/// Read-only access to committee decisions
pub struct GetDecisionUseCase {
    state: Arc<CouncilState>,
}

impl GetDecisionUseCase {
    pub fn new(state: Arc<CouncilState>) -> Self {
        Self { state }
    }

    /// Current record of a committee, decided or not
    pub fn decision(&self, committee_id: CommitteeId) -> Result<DecisionRecord, DomainError> {
        let committee = self.state.committee(committee_id)?;
        let committee = committee.lock();
        Ok(DecisionRecord::from(&*committee))
    }

    pub fn is_committee_member(
        &self,
        committee_id: CommitteeId,
        validator: &ValidatorId,
    ) -> Result<bool, DomainError> {
        let committee = self.state.committee(committee_id)?;
        let is_member = committee.lock().is_member(validator);
        Ok(is_member)
    }
}
