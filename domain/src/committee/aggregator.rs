//! Decision aggregation
//!
//! Turns a fully voted committee into its final verdict. The quorum is
//! "every member voted": there is no early exit once a majority is reached,
//! so every member's feedback is always collected. The verdict is a strict
//! majority of approvals; a tie rejects.

use super::entities::Committee;
use crate::core::current_timestamp;
use crate::core::error::DomainError;
use crate::quorum::Tally;
use serde::{Deserialize, Serialize};

/// Delimiter placed between member feedback texts
pub const DEFAULT_FEEDBACK_DELIMITER: &str = "|";

/// Verdict of a decided committee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub approved: bool,
    pub tally: Tally,
    /// Every member's feedback, in member-assignment order
    pub concatenated_feedback: String,
    /// When the decision was sealed (milliseconds since epoch)
    pub decided_at: u64,
}

/// Computes and seals committee verdicts.
///
/// # Example
///
/// ```
/// use council_domain::{
///     Committee, CommitteeId, CommitteeType, DecisionAggregator, ValidatorId,
///     current_timestamp,
/// };
///
/// let members: Vec<ValidatorId> = ["0xa", "0xb"]
///     .iter()
///     .map(|m| ValidatorId::new(m).unwrap())
///     .collect();
/// let mut committee = Committee::new(
///     CommitteeId::new(1),
///     CommitteeType::Event,
///     3,
///     members.clone(),
///     current_timestamp(),
/// )
/// .unwrap();
///
/// let aggregator = DecisionAggregator::new(" / ");
/// committee.cast_vote(&members[0], true, "yes", &aggregator).unwrap();
/// committee.cast_vote(&members[1], false, "no", &aggregator).unwrap();
///
/// let decision = committee.decision().unwrap();
/// assert!(!decision.approved); // 1-1 tie rejects
/// assert_eq!(decision.concatenated_feedback, "yes / no");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionAggregator {
    delimiter: String,
}

impl Default for DecisionAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DELIMITER)
    }
}

impl DecisionAggregator {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Seal the committee's decision.
    ///
    /// Fails if the committee is already decided or if any member has not
    /// voted yet. On success the committee is in its terminal state.
    pub fn finalize(&self, committee: &mut Committee) -> Result<FinalDecision, DomainError> {
        if committee.is_completed() {
            return Err(DomainError::CommitteeAlreadyDecided(committee.id()));
        }
        let cast = committee.votes_cast();
        if cast != committee.size() {
            return Err(DomainError::VotingIncomplete {
                committee: committee.id(),
                cast,
                required: committee.size(),
            });
        }

        let tally = committee.tally();
        let approved = tally.is_approved();
        let concatenated_feedback = committee
            .ballots()
            .iter()
            .flatten()
            .map(|b| b.feedback.as_str())
            .collect::<Vec<_>>()
            .join(&self.delimiter);

        let decision = FinalDecision {
            approved,
            tally,
            concatenated_feedback,
            decided_at: current_timestamp(),
        };
        committee.seal(decision.clone());
        Ok(decision)
    }
}
