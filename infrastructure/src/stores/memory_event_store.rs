//! In-memory charity event store

use async_trait::async_trait;
use council_application::{EventStorePort, StoreError};
use council_domain::{CommitteeType, EventDetail, Milestone, ProposalStatus};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct EventEntry {
    detail: Option<EventDetail>,
    milestones: Vec<Milestone>,
}

/// Event/milestone ledger kept in memory.
///
/// A milestone decision applies to the first milestone of the event that
/// is still pending.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<u64, EventEntry>>,
    latency: Option<Duration>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every read by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn insert_event(&self, event: EventDetail) {
        let mut events = self.events.write().await;
        let id = event.id;
        events.entry(id).or_default().detail = Some(event);
    }

    pub async fn insert_milestone(&self, milestone: Milestone) {
        let mut events = self.events.write().await;
        events
            .entry(milestone.event_id)
            .or_default()
            .milestones
            .push(milestone);
    }

    pub async fn event_status(&self, event_id: u64) -> Option<ProposalStatus> {
        let events = self.events.read().await;
        events
            .get(&event_id)
            .and_then(|e| e.detail.as_ref())
            .map(|d| d.status)
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl EventStorePort for InMemoryEventStore {
    async fn get_event_detail(&self, event_id: u64) -> Result<EventDetail, StoreError> {
        self.delay().await;
        let events = self.events.read().await;
        events
            .get(&event_id)
            .and_then(|e| e.detail.clone())
            .ok_or_else(|| StoreError::not_found(format!("event {}", event_id)))
    }

    async fn get_milestones(&self, event_id: u64) -> Result<Vec<Milestone>, StoreError> {
        self.delay().await;
        let events = self.events.read().await;
        events
            .get(&event_id)
            .map(|e| e.milestones.clone())
            .ok_or_else(|| StoreError::not_found(format!("event {}", event_id)))
    }

    async fn apply_decision(
        &self,
        committee_type: CommitteeType,
        type_id: u64,
        approved: bool,
    ) -> Result<(), StoreError> {
        let status = ProposalStatus::from_decision(approved);
        let mut events = self.events.write().await;
        let entry = events
            .get_mut(&type_id)
            .ok_or_else(|| StoreError::not_found(format!("event {}", type_id)))?;

        match committee_type {
            CommitteeType::Event => {
                let detail = entry
                    .detail
                    .as_mut()
                    .ok_or_else(|| StoreError::not_found(format!("event {}", type_id)))?;
                detail.status = status;
            }
            CommitteeType::Milestone => {
                let milestone = entry
                    .milestones
                    .iter_mut()
                    .find(|m| m.status == ProposalStatus::Pending)
                    .ok_or_else(|| {
                        StoreError::not_found(format!("pending milestone of event {}", type_id))
                    })?;
                milestone.status = status;
            }
            CommitteeType::Validator => {
                return Err(StoreError::Unavailable(
                    "validator applications are not kept in the event store".to_string(),
                ));
            }
        }

        debug!("Event store applied {} {} as {}", committee_type, type_id, status);
        Ok(())
    }
}
