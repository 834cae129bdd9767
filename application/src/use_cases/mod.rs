//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cast_vote;
pub mod dispatch_proposal;
pub mod form_committee;
pub mod get_decision;
pub mod manage_validators;
pub mod ongoing_decisions;
pub mod settlement;
pub(crate) mod shared;
