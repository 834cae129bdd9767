//! Shared utilities for use cases.
//!
//! Contains cancellation checking and bounded store-call helpers used by
//! proposal dispatch and settlement.

use crate::ports::store_error::StoreError;
use council_domain::DomainError;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(DomainError::Cancelled)` if the token is cancelled.
pub(crate) fn check_cancelled(token: &CancellationToken) -> Result<(), DomainError> {
    if token.is_cancelled() {
        return Err(DomainError::Cancelled);
    }
    Ok(())
}

/// Run a store call under a deadline.
///
/// An elapsed deadline is reported as `StoreError::Timeout`.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(StoreError::Timeout))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Hand-written store mocks shared by the use case tests.

    use crate::ports::application_store::ValidatorApplicationPort;
    use crate::ports::decision_journal::{DecisionJournal, JournalEvent};
    use crate::ports::event_store::EventStorePort;
    use crate::ports::store_error::StoreError;
    use async_trait::async_trait;
    use council_domain::{
        CommitteeType, EventCategory, EventDetail, Milestone, ProfileRef, ProposalStatus,
        ValidatorApplication, ValidatorId,
    };
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Event store with canned events, optional latency and failure injection
    #[derive(Default)]
    pub struct MockEventStore {
        pub events: Mutex<HashMap<u64, EventDetail>>,
        pub milestones: Mutex<HashMap<u64, Vec<Milestone>>>,
        pub failing: Mutex<HashSet<u64>>,
        pub slow: Mutex<HashSet<u64>>,
        pub applied: Mutex<Vec<(CommitteeType, u64, bool)>>,
    }

    impl MockEventStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_event(self, id: u64, name: &str, milestones: usize) -> Self {
            self.events.lock().unwrap().insert(
                id,
                EventDetail {
                    id,
                    owner: ValidatorId::new("0xowner").unwrap(),
                    name: name.to_string(),
                    description: format!("{} description", name),
                    category: EventCategory::Education,
                    status: ProposalStatus::Pending,
                },
            );
            let list = (0..milestones as u64)
                .map(|i| Milestone {
                    id: i,
                    event_id: id,
                    description: format!("milestone {}", i),
                    status: ProposalStatus::Pending,
                })
                .collect();
            self.milestones.lock().unwrap().insert(id, list);
            self
        }

        /// Reads of `id` fail with `Unavailable`
        pub fn failing_on(self, id: u64) -> Self {
            self.failing.lock().unwrap().insert(id);
            self
        }

        /// Reads of `id` never complete within any test deadline
        pub fn slow_on(self, id: u64) -> Self {
            self.slow.lock().unwrap().insert(id);
            self
        }

        pub fn applied(&self) -> Vec<(CommitteeType, u64, bool)> {
            self.applied.lock().unwrap().clone()
        }

        async fn gate(&self, id: u64) -> Result<(), StoreError> {
            let slow = self.slow.lock().unwrap().contains(&id);
            if slow {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            if self.failing.lock().unwrap().contains(&id) {
                return Err(StoreError::Unavailable("injected".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EventStorePort for MockEventStore {
        async fn get_event_detail(&self, event_id: u64) -> Result<EventDetail, StoreError> {
            self.gate(event_id).await?;
            self.events
                .lock()
                .unwrap()
                .get(&event_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(format!("event {}", event_id)))
        }

        async fn get_milestones(&self, event_id: u64) -> Result<Vec<Milestone>, StoreError> {
            self.gate(event_id).await?;
            self.milestones
                .lock()
                .unwrap()
                .get(&event_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(format!("event {}", event_id)))
        }

        async fn apply_decision(
            &self,
            committee_type: CommitteeType,
            type_id: u64,
            approved: bool,
        ) -> Result<(), StoreError> {
            if self.failing.lock().unwrap().contains(&type_id) {
                return Err(StoreError::Unavailable("injected".to_string()));
            }
            self.applied
                .lock()
                .unwrap()
                .push((committee_type, type_id, approved));
            Ok(())
        }
    }

    /// Journal that keeps every event in memory
    #[derive(Default)]
    pub struct RecordingJournal {
        pub events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingJournal {
        pub fn events(&self) -> Vec<(&'static str, serde_json::Value)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl DecisionJournal for RecordingJournal {
        fn record(&self, event: JournalEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    /// Validator application store with canned applications
    #[derive(Default)]
    pub struct MockApplicationStore {
        pub applications: Mutex<HashMap<u64, ValidatorApplication>>,
        pub applied: Mutex<Vec<(u64, bool)>>,
    }

    impl MockApplicationStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_application(self, id: u64, applicant: &str, profile: &str) -> Self {
            self.applications.lock().unwrap().insert(
                id,
                ValidatorApplication {
                    id,
                    applicant: ValidatorId::new(applicant).unwrap(),
                    profile: ProfileRef::new(profile),
                    status: ProposalStatus::Pending,
                },
            );
            self
        }

        pub fn applied(&self) -> Vec<(u64, bool)> {
            self.applied.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ValidatorApplicationPort for MockApplicationStore {
        async fn get_application(
            &self,
            application_id: u64,
        ) -> Result<ValidatorApplication, StoreError> {
            self.applications
                .lock()
                .unwrap()
                .get(&application_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(format!("application {}", application_id)))
        }

        async fn apply_decision(
            &self,
            application_id: u64,
            approved: bool,
        ) -> Result<(), StoreError> {
            self.applied.lock().unwrap().push((application_id, approved));
            Ok(())
        }
    }
}
