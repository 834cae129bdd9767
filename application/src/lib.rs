//! Application layer for sortition-council
//!
//! This crate contains use cases, port definitions, the shared engine state
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_DISPATCH_TIMEOUT, EngineParams};
pub use ports::{
    application_store::ValidatorApplicationPort,
    decision_journal::{DecisionJournal, JournalEvent, NoDecisionJournal},
    event_store::EventStorePort,
    store_error::StoreError,
};
pub use state::{CouncilState, SharedCommittee};
pub use use_cases::cast_vote::{CastVoteInput, CastVoteOutput, CastVoteUseCase};
pub use use_cases::dispatch_proposal::ProposalDispatcher;
pub use use_cases::form_committee::{FormCommitteeInput, FormCommitteeOutput, FormCommitteeUseCase};
pub use use_cases::get_decision::GetDecisionUseCase;
pub use use_cases::manage_validators::ManageValidatorsUseCase;
pub use use_cases::ongoing_decisions::{OngoingDecision, OngoingDecisionsUseCase};
pub use use_cases::settlement::{DecisionSettlement, SettlementError};
