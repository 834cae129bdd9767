//! Domain layer for sortition-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sortition
//!
//! Decisions are delegated to a small committee drawn uniformly at random,
//! without replacement, from the active validators:
//!
//! - **Validator registry**: the eligible pool, governed by a role flag
//! - **Committee**: a fixed roster with one ballot slot per member
//! - **Decision**: sealed once every member has voted; ties reject
//!
//! ## Proposal domains
//!
//! - **Event**: a new charity event
//! - **Milestone**: completion of an event milestone
//! - **Validator**: an applicant asking to join the validator set

pub mod committee;
pub mod core;
pub mod proposal;
pub mod quorum;
pub mod sortition;
pub mod validator;

// Re-export commonly used types
pub use committee::{
    Committee, CommitteePhase, CommitteeType, DEFAULT_FEEDBACK_DELIMITER, DecisionAggregator,
    DecisionRecord, FinalDecision, VoteOutcome,
};
pub use crate::core::{
    current_timestamp,
    error::DomainError,
    identity::{CommitteeId, ProfileRef, ValidatorId},
};
pub use proposal::{
    EventCategory, EventDetail, Milestone, ProposalDetail, ProposalStatus, ValidatorApplication,
};
pub use quorum::{Ballot, Tally, vote_summary};
pub use sortition::{RandomnessSource, SeededRandomness, draw_committee};
pub use validator::{Validator, ValidatorRegistry, ValidatorRole};
