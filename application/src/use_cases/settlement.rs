//! Decision settlement
//!
//! Hands a finalized decision to the store that owns the proposal. For
//! validator applications an approval also activates the applicant in the
//! registry.

use super::manage_validators::grant_role;
use super::shared::bounded;
use crate::ports::application_store::ValidatorApplicationPort;
use crate::ports::decision_journal::JournalEvent;
use crate::ports::event_store::EventStorePort;
use crate::ports::store_error::StoreError;
use crate::state::CouncilState;
use council_domain::{CommitteeType, DecisionRecord};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while settling a decision
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettlementError {
    #[error("Committee is not decided yet")]
    NotDecided,

    #[error("Failed to settle {committee_type} {type_id}: {source}")]
    Store {
        committee_type: CommitteeType,
        type_id: u64,
        #[source]
        source: StoreError,
    },
}

/// Applies final decisions to the external stores
pub struct DecisionSettlement<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> {
    state: Arc<CouncilState>,
    events: Arc<E>,
    applications: Arc<A>,
}

impl<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> DecisionSettlement<E, A> {
    pub fn new(state: Arc<CouncilState>, events: Arc<E>, applications: Arc<A>) -> Self {
        Self {
            state,
            events,
            applications,
        }
    }

    /// Settle a completed decision.
    ///
    /// Finality is never undone here; a failure only means the owning store
    /// was not told.
    pub async fn settle(&self, record: &DecisionRecord) -> Result<(), SettlementError> {
        if !record.is_completed {
            return Err(SettlementError::NotDecided);
        }

        let committee_type = record.committee_type;
        let type_id = record.type_id;
        let approved = record.final_decision;
        let limit = self.state.params().dispatch_timeout;

        let result = match committee_type {
            CommitteeType::Event | CommitteeType::Milestone => {
                bounded(
                    limit,
                    self.events
                        .apply_decision(committee_type, type_id, approved),
                )
                .await
            }
            CommitteeType::Validator => self.settle_application(type_id, approved).await,
        };

        match result {
            Ok(()) => {
                info!(
                    "Settled {} {} as {}",
                    committee_type,
                    type_id,
                    if approved { "approved" } else { "rejected" }
                );
                self.state.journal(JournalEvent::new(
                    "decision_settled",
                    json!({
                        "committee_id": record.committee_id,
                        "committee_type": committee_type,
                        "type_id": type_id,
                        "approved": approved,
                    }),
                ));
                Ok(())
            }
            Err(source) => {
                warn!(
                    "Settlement of {} {} failed: {}",
                    committee_type, type_id, source
                );
                self.state.journal(JournalEvent::new(
                    "settlement_failed",
                    json!({
                        "committee_id": record.committee_id,
                        "committee_type": committee_type,
                        "type_id": type_id,
                        "error": source.to_string(),
                    }),
                ));
                Err(SettlementError::Store {
                    committee_type,
                    type_id,
                    source,
                })
            }
        }
    }

    async fn settle_application(&self, application_id: u64, approved: bool) -> Result<(), StoreError> {
        let limit = self.state.params().dispatch_timeout;
        if approved {
            let application =
                bounded(limit, self.applications.get_application(application_id)).await?;
            grant_role(
                &self.state,
                application.applicant,
                Some(application.profile),
            );
        }
        bounded(
            limit,
            self.applications.apply_decision(application_id, approved),
        )
        .await
    }
}
