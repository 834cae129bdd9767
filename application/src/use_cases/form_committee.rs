//! Form Committee use case
//!
//! Draws a committee from the active pool and stores it in the Formed phase.

use crate::ports::decision_journal::JournalEvent;
use crate::state::CouncilState;
use council_domain::{
    Committee, CommitteeId, CommitteeType, DomainError, RandomnessSource, ValidatorId,
    current_timestamp, draw_committee,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the FormCommittee use case
#[derive(Debug, Clone)]
pub struct FormCommitteeInput {
    pub committee_type: CommitteeType,
    /// Foreign key into the owning store's proposal
    pub type_id: u64,
    /// Committee size; the engine default when `None`
    pub size: Option<usize>,
}

impl FormCommitteeInput {
    pub fn new(committee_type: CommitteeType, type_id: u64) -> Self {
        Self {
            committee_type,
            type_id,
            size: None,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Output of the FormCommittee use case
#[derive(Debug, Clone, PartialEq)]
pub struct FormCommitteeOutput {
    pub committee_id: CommitteeId,
    /// Roster in draw order
    pub members: Vec<ValidatorId>,
}

/// Use case for committee sortition
pub struct FormCommitteeUseCase {
    state: Arc<CouncilState>,
    randomness: Arc<dyn RandomnessSource>,
}

impl FormCommitteeUseCase {
    pub fn new(state: Arc<CouncilState>, randomness: Arc<dyn RandomnessSource>) -> Self {
        Self { state, randomness }
    }

    pub fn execute(&self, input: FormCommitteeInput) -> Result<FormCommitteeOutput, DomainError> {
        let size = input.size.unwrap_or(self.state.params().committee_size);

        // Held until the committee is stored so a concurrent revoke cannot
        // slip between snapshot and creation.
        let registry = self.state.registry();
        let pool = registry.active_pool();
        debug!(
            "Drawing {} of {} active validators for {} {}",
            size,
            pool.len(),
            input.committee_type,
            input.type_id
        );

        let members = draw_committee(&pool, size, self.randomness.as_ref())?;
        let committee_id = self.state.allocate_committee_id();
        let created_at = current_timestamp();
        let committee = Committee::new(
            committee_id,
            input.committee_type,
            input.type_id,
            members.clone(),
            created_at,
        )?;
        self.state.insert_committee(committee);
        drop(registry);

        info!(
            "Formed committee {} for {} {} with {} members",
            committee_id,
            input.committee_type,
            input.type_id,
            members.len()
        );
        self.state.journal(JournalEvent::new(
            "committee_formed",
            json!({
                "committee_id": committee_id,
                "committee_type": input.committee_type,
                "type_id": input.type_id,
                "members": members,
                "created_at": created_at,
            }),
        ));

        Ok(FormCommitteeOutput {
            committee_id,
            members,
        })
    }
}
