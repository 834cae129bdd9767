//! Validator-application store port

use super::store_error::StoreError;
use async_trait::async_trait;
use council_domain::ValidatorApplication;

/// Port for the external store of validator applications
#[async_trait]
pub trait ValidatorApplicationPort: Send + Sync {
    /// A pending (or already decided) application
    async fn get_application(
        &self,
        application_id: u64,
    ) -> Result<ValidatorApplication, StoreError>;

    /// Approval callback, invoked after the engine has granted (or refused)
    /// the applicant's validator role.
    async fn apply_decision(&self, application_id: u64, approved: bool) -> Result<(), StoreError>;
}
