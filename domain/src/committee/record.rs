//! Decision record: the query-time projection of a committee

use super::committee_type::CommitteeType;
use super::entities::Committee;
use crate::core::identity::{CommitteeId, ValidatorId};
use crate::quorum::vote_summary;
use serde::{Deserialize, Serialize};

/// Read-only view of a committee's votes and verdict.
///
/// `validator_addresses`, `validator_votes` and `validator_feedbacks` are
/// aligned with member order; members who have not voted yet are `None`.
/// `final_decision` is `false` and `concatenated_feedback` empty until the
/// committee is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub committee_id: CommitteeId,
    pub committee_type: CommitteeType,
    pub type_id: u64,
    pub is_completed: bool,
    pub validator_addresses: Vec<ValidatorId>,
    pub validator_votes: Vec<Option<bool>>,
    pub validator_feedbacks: Vec<Option<String>>,
    pub total_validators: usize,
    pub votes_cast: usize,
    pub final_decision: bool,
    pub concatenated_feedback: String,
}

impl DecisionRecord {
    /// `[●○?]`-style summary in member order
    pub fn vote_summary(&self) -> String {
        vote_summary(self.validator_votes.iter().copied())
    }
}

impl From<&Committee> for DecisionRecord {
    fn from(committee: &Committee) -> Self {
        let decision = committee.decision();
        Self {
            committee_id: committee.id(),
            committee_type: committee.committee_type(),
            type_id: committee.type_id(),
            is_completed: committee.is_completed(),
            validator_addresses: committee.members().to_vec(),
            validator_votes: committee
                .ballots()
                .iter()
                .map(|b| b.as_ref().map(|b| b.approve))
                .collect(),
            validator_feedbacks: committee
                .ballots()
                .iter()
                .map(|b| b.as_ref().map(|b| b.feedback.clone()))
                .collect(),
            total_validators: committee.size(),
            votes_cast: committee.votes_cast(),
            final_decision: decision.is_some_and(|d| d.approved),
            concatenated_feedback: decision
                .map(|d| d.concatenated_feedback.clone())
                .unwrap_or_default(),
        }
    }
}
