//! Cast Vote use case
//!
//! Records one member's ballot under the committee lock. The vote that
//! completes the roster finalizes the committee; settlement then runs with
//! the lock released.

use super::settlement::DecisionSettlement;
use crate::ports::application_store::ValidatorApplicationPort;
use crate::ports::decision_journal::JournalEvent;
use crate::ports::event_store::EventStorePort;
use crate::state::CouncilState;
use council_domain::{
    CommitteeId, CommitteePhase, DecisionRecord, DomainError, ValidatorId, VoteOutcome,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the CastVote use case
#[derive(Debug, Clone)]
pub struct CastVoteInput {
    pub committee_id: CommitteeId,
    pub voter: ValidatorId,
    pub approve: bool,
    pub feedback: String,
}

impl CastVoteInput {
    pub fn new(committee_id: CommitteeId, voter: ValidatorId, approve: bool) -> Self {
        Self {
            committee_id,
            voter,
            approve,
            feedback: String::new(),
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }
}

/// Output of the CastVote use case
#[derive(Debug, Clone)]
pub struct CastVoteOutput {
    pub committee_id: CommitteeId,
    pub phase: CommitteePhase,
    pub votes_cast: usize,
    pub remaining: usize,
    /// Final record, present when this vote decided the committee
    pub record: Option<DecisionRecord>,
    /// Why the owning store could not be told about the decision
    pub settlement_error: Option<String>,
}

impl CastVoteOutput {
    pub fn is_decided(&self) -> bool {
        self.phase == CommitteePhase::Decided
    }
}

/// Use case for voting on a committee
pub struct CastVoteUseCase<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> {
    state: Arc<CouncilState>,
    settlement: DecisionSettlement<E, A>,
}

impl<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> CastVoteUseCase<E, A> {
    pub fn new(state: Arc<CouncilState>, events: Arc<E>, applications: Arc<A>) -> Self {
        let settlement = DecisionSettlement::new(Arc::clone(&state), events, applications);
        Self { state, settlement }
    }

    pub async fn execute(&self, input: CastVoteInput) -> Result<CastVoteOutput, DomainError> {
        let committee = self.state.committee(input.committee_id)?;

        // Journaled under the lock so the journal follows the order in which
        // votes were applied. The guard must not live across the settlement
        // await below.
        let (outcome, record) = {
            let mut committee = committee.lock();
            let outcome = committee
                .cast_vote(
                    &input.voter,
                    input.approve,
                    input.feedback.as_str(),
                    self.state.aggregator(),
                )
                .inspect_err(|e| {
                    if e.is_caller_error() {
                        debug!("Rejected vote by {}: {}", input.voter, e);
                    } else {
                        warn!("Vote by {} failed: {}", input.voter, e);
                    }
                })?;
            let record = DecisionRecord::from(&*committee);

            self.state.journal(JournalEvent::new(
                "vote_cast",
                json!({
                    "committee_id": input.committee_id,
                    "validator": input.voter,
                    "approve": input.approve,
                    "feedback": input.feedback,
                    "votes_cast": record.votes_cast,
                }),
            ));
            if let VoteOutcome::Decided(decision) = &outcome {
                self.state.journal(JournalEvent::new(
                    "committee_decided",
                    json!({
                        "committee_id": input.committee_id,
                        "committee_type": record.committee_type,
                        "type_id": record.type_id,
                        "approved": decision.approved,
                        "approve_count": decision.tally.approve_count,
                        "reject_count": decision.tally.reject_count,
                        "concatenated_feedback": decision.concatenated_feedback,
                    }),
                ));
            }
            (outcome, record)
        };

        debug!(
            "{} voted {} on committee {}",
            input.voter,
            if input.approve { "approve" } else { "reject" },
            input.committee_id
        );

        match outcome {
            VoteOutcome::Decided(decision) => {
                info!(
                    "Committee {} decided: {} ({})",
                    input.committee_id,
                    if decision.approved { "APPROVED" } else { "REJECTED" },
                    record.vote_summary()
                );

                let settlement_error = self
                    .settlement
                    .settle(&record)
                    .await
                    .err()
                    .map(|e| e.to_string());

                Ok(CastVoteOutput {
                    committee_id: input.committee_id,
                    phase: CommitteePhase::Decided,
                    votes_cast: record.votes_cast,
                    remaining: 0,
                    record: Some(record),
                    settlement_error,
                })
            }
            VoteOutcome::Recorded {
                votes_cast,
                remaining,
            } => Ok(CastVoteOutput {
                committee_id: input.committee_id,
                phase: CommitteePhase::Voting,
                votes_cast,
                remaining,
                record: None,
                settlement_error: None,
            }),
        }
    }
}
