//! Proposal dispatch
//!
//! Resolves a committee's `(type, type_id)` pair into the read-only detail
//! of the proposal it decides on. Read only; every store call is bounded by
//! the configured timeout and can be cancelled.

use super::shared::{bounded, check_cancelled};
use crate::config::DEFAULT_DISPATCH_TIMEOUT;
use crate::ports::application_store::ValidatorApplicationPort;
use crate::ports::event_store::EventStorePort;
use crate::ports::store_error::StoreError;
use council_domain::{CommitteeType, DomainError, ProposalDetail};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Type-directed lookup of proposal detail
pub struct ProposalDispatcher<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> {
    events: Arc<E>,
    applications: Arc<A>,
    timeout: Duration,
}

impl<E: EventStorePort + 'static, A: ValidatorApplicationPort + 'static> ProposalDispatcher<E, A> {
    /// Dispatcher bounding each store call by [`DEFAULT_DISPATCH_TIMEOUT`]
    pub fn new(events: Arc<E>, applications: Arc<A>) -> Self {
        Self {
            events,
            applications,
            timeout: DEFAULT_DISPATCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve proposal detail without external cancellation
    pub async fn resolve(
        &self,
        committee_type: CommitteeType,
        type_id: u64,
    ) -> Result<ProposalDetail, DomainError> {
        self.resolve_with_cancel(committee_type, type_id, &CancellationToken::new())
            .await
    }

    /// Resolve proposal detail.
    ///
    /// Store failures and timeouts become `UnknownProposal`; a cancelled
    /// token becomes `Cancelled`.
    pub async fn resolve_with_cancel(
        &self,
        committee_type: CommitteeType,
        type_id: u64,
        cancel: &CancellationToken,
    ) -> Result<ProposalDetail, DomainError> {
        check_cancelled(cancel)?;
        debug!("Resolving {} {}", committee_type, type_id);

        let fetched = tokio::select! {
            result = self.fetch(committee_type, type_id) => result,
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
        };

        fetched.map_err(|cause| {
            warn!(
                "Could not resolve {} {}: {}",
                committee_type, type_id, cause
            );
            DomainError::UnknownProposal {
                committee_type,
                type_id,
            }
        })
    }

    async fn fetch(
        &self,
        committee_type: CommitteeType,
        type_id: u64,
    ) -> Result<ProposalDetail, StoreError> {
        match committee_type {
            CommitteeType::Event => {
                let (event, milestones) = tokio::try_join!(
                    bounded(self.timeout, self.events.get_event_detail(type_id)),
                    bounded(self.timeout, self.events.get_milestones(type_id)),
                )?;
                Ok(ProposalDetail::Event { event, milestones })
            }
            CommitteeType::Milestone => {
                let milestones =
                    bounded(self.timeout, self.events.get_milestones(type_id)).await?;
                Ok(ProposalDetail::Milestone {
                    event_id: type_id,
                    milestones,
                })
            }
            CommitteeType::Validator => {
                let application =
                    bounded(self.timeout, self.applications.get_application(type_id)).await?;
                Ok(ProposalDetail::Validator(application))
            }
        }
    }
}
