//! Port for the structured decision journal.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while the journal records every committee
//! lifecycle event (formation, votes, decision, settlement) in a
//! machine-readable form.

use serde_json::Value;

/// A structured lifecycle event.
pub struct JournalEvent {
    /// Event type identifier (e.g. "committee_formed", "vote_cast").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl JournalEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording lifecycle events.
///
/// `record` is synchronous and infallible: a journal failure must never
/// change the outcome of a vote.
pub trait DecisionJournal: Send + Sync {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when the journal is disabled.
pub struct NoDecisionJournal;

impl DecisionJournal for NoDecisionJournal {
    fn record(&self, _event: JournalEvent) {}
}
