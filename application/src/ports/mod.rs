//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod application_store;
pub mod decision_journal;
pub mod event_store;
pub mod store_error;
