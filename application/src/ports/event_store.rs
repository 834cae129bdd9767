//! Event store port
//!
//! The charity-event/milestone ledger lives outside the engine. This port is
//! the narrow contract the engine uses to read proposal detail from it and to
//! hand it finalized decisions.

use super::store_error::StoreError;
use async_trait::async_trait;
use council_domain::{CommitteeType, EventDetail, Milestone};

/// Port for the external event/milestone store
#[async_trait]
pub trait EventStorePort: Send + Sync {
    /// Metadata of a charity event
    async fn get_event_detail(&self, event_id: u64) -> Result<EventDetail, StoreError>;

    /// All milestones of a charity event
    async fn get_milestones(&self, event_id: u64) -> Result<Vec<Milestone>, StoreError>;

    /// Status-update callback invoked once a committee for an Event or
    /// Milestone proposal is decided.
    ///
    /// For `CommitteeType::Milestone`, `type_id` is the owning event id.
    async fn apply_decision(
        &self,
        committee_type: CommitteeType,
        type_id: u64,
        approved: bool,
    ) -> Result<(), StoreError>;
}
