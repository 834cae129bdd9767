//! In-memory validator application store

use async_trait::async_trait;
use council_application::{StoreError, ValidatorApplicationPort};
use council_domain::{ProposalStatus, ValidatorApplication};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

/// Validator applications kept in memory
#[derive(Default)]
pub struct InMemoryApplicationStore {
    applications: RwLock<HashMap<u64, ValidatorApplication>>,
    latency: Option<Duration>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub async fn insert(&self, application: ValidatorApplication) {
        self.applications
            .write()
            .await
            .insert(application.id, application);
    }
}

#[async_trait]
impl ValidatorApplicationPort for InMemoryApplicationStore {
    async fn get_application(
        &self,
        application_id: u64,
    ) -> Result<ValidatorApplication, StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.applications
            .read()
            .await
            .get(&application_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("application {}", application_id)))
    }

    async fn apply_decision(&self, application_id: u64, approved: bool) -> Result<(), StoreError> {
        let mut applications = self.applications.write().await;
        let application = applications
            .get_mut(&application_id)
            .ok_or_else(|| StoreError::not_found(format!("application {}", application_id)))?;
        application.status = ProposalStatus::from_decision(approved);
        Ok(())
    }
}
