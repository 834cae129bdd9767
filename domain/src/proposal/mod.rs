//! Proposal domain
//!
//! Types describing the proposals committees decide on. They belong to
//! external stores; the engine only reads them for display.

pub mod entities;

pub use entities::{
    EventCategory, EventDetail, Milestone, ProposalDetail, ProposalStatus, ValidatorApplication,
};
