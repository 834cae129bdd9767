//! Ongoing decisions use case
//!
//! Lists the open committees a validator sits on, each with the detail of
//! the proposal it decides.

use super::dispatch_proposal::ProposalDispatcher;
use super::shared::check_cancelled;
use crate::ports::application_store::ValidatorApplicationPort;
use crate::ports::event_store::EventStorePort;
use crate::state::CouncilState;
use council_domain::{CommitteeId, CommitteeType, DomainError, ProposalDetail, ValidatorId};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One open committee from the point of view of a member
#[derive(Debug, Clone, Serialize)]
pub struct OngoingDecision {
    pub committee_id: CommitteeId,
    pub committee_type: CommitteeType,
    /// Human-readable committee type
    pub type_label: &'static str,
    pub type_id: u64,
    pub created_at: u64,
    pub votes_cast: usize,
    pub total_validators: usize,
    /// Whether the requesting member has already voted
    pub has_voted: bool,
    /// Proposal detail, absent when it could not be resolved
    pub proposal: Option<ProposalDetail>,
    /// Why the proposal could not be resolved
    pub error: Option<String>,
}

/// Use case for a member's pending committee work
pub struct OngoingDecisionsUseCase<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static>
{
    state: Arc<CouncilState>,
    dispatcher: Arc<ProposalDispatcher<E, A>>,
}

impl<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static>
    OngoingDecisionsUseCase<E, A>
{
    pub fn new(state: Arc<CouncilState>, dispatcher: Arc<ProposalDispatcher<E, A>>) -> Self {
        Self { state, dispatcher }
    }

    /// Open committees containing `user`, oldest first
    pub async fn for_user(&self, user: &ValidatorId) -> Vec<OngoingDecision> {
        let mut entries = self.snapshot(user);
        self.attach_proposals(&mut entries, &CancellationToken::new())
            .await;
        entries
    }

    /// Like [`for_user`](Self::for_user), but aborts with `Cancelled` when the
    /// token fires.
    pub async fn for_user_with_cancel(
        &self,
        user: &ValidatorId,
        cancel: &CancellationToken,
    ) -> Result<Vec<OngoingDecision>, DomainError> {
        check_cancelled(cancel)?;
        let mut entries = self.snapshot(user);
        self.attach_proposals(&mut entries, cancel).await;
        check_cancelled(cancel)?;
        Ok(entries)
    }

    /// Collect open committees without holding any lock across an await
    fn snapshot(&self, user: &ValidatorId) -> Vec<OngoingDecision> {
        let mut entries: Vec<OngoingDecision> = self
            .state
            .committees()
            .iter()
            .filter_map(|shared| {
                let committee = shared.lock();
                if committee.is_completed() || !committee.is_member(user) {
                    return None;
                }
                Some(OngoingDecision {
                    committee_id: committee.id(),
                    committee_type: committee.committee_type(),
                    type_label: committee.committee_type().label(),
                    type_id: committee.type_id(),
                    created_at: committee.created_at(),
                    votes_cast: committee.votes_cast(),
                    total_validators: committee.size(),
                    has_voted: committee.has_voted(user),
                    proposal: None,
                    error: None,
                })
            })
            .collect();

        entries.sort_by_key(|e| (e.created_at, e.committee_id));
        debug!("{} has {} open committees", user, entries.len());
        entries
    }

    async fn attach_proposals(&self, entries: &mut [OngoingDecision], cancel: &CancellationToken) {
        let lookups = entries.iter().map(|entry| {
            self.dispatcher
                .resolve_with_cancel(entry.committee_type, entry.type_id, cancel)
        });
        let results = join_all(lookups).await;

        for (entry, result) in entries.iter_mut().zip(results) {
            match result {
                Ok(proposal) => entry.proposal = Some(proposal),
                Err(e) => entry.error = Some(e.to_string()),
            }
        }
    }
}
