//! Logging infrastructure: structured decision journal.
//!
//! Provides [`JsonlDecisionJournal`], a JSONL file writer that implements
//! the [`DecisionJournal`](council_application::DecisionJournal) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlDecisionJournal;
