//! Committee domain
//!
//! A committee is the unit of delegated decision-making for one proposal:
//! a fixed roster drawn by sortition, one ballot slot per member, and a
//! single terminal decision computed by the [`DecisionAggregator`].

pub mod aggregator;
pub mod committee_type;
pub mod entities;
pub mod record;

pub use aggregator::{DEFAULT_FEEDBACK_DELIMITER, DecisionAggregator, FinalDecision};
pub use committee_type::CommitteeType;
pub use entities::{Committee, CommitteePhase, VoteOutcome};
pub use record::DecisionRecord;
