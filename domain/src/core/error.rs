//! Domain error types

use crate::committee::CommitteeType;
use crate::core::identity::{CommitteeId, ValidatorId};
use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a caller-side precondition violation or a local
/// invariant failure. None of them is transient, so nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid identity: {0:?}")]
    InvalidIdentity(String),

    #[error("Validator already registered: {0}")]
    DuplicateValidator(ValidatorId),

    #[error("Unknown validator: {0}")]
    UnknownValidator(ValidatorId),

    #[error("Insufficient validators: requested {requested}, only {available} active")]
    InsufficientValidators { requested: usize, available: usize },

    #[error("Committee size must be greater than zero")]
    InvalidCommitteeSize,

    #[error("Randomness source returned an invalid draw: {0}")]
    InvalidDraw(String),

    #[error("Inconsistent committee state: {0}")]
    InconsistentCommittee(String),

    #[error("Unknown committee: {0}")]
    UnknownCommittee(CommitteeId),

    #[error("{validator} is not a member of committee {committee}")]
    NotCommitteeMember {
        committee: CommitteeId,
        validator: ValidatorId,
    },

    #[error("{validator} already voted in committee {committee}")]
    AlreadyVoted {
        committee: CommitteeId,
        validator: ValidatorId,
    },

    #[error("Committee {0} has already decided")]
    CommitteeAlreadyDecided(CommitteeId),

    #[error("Committee {committee} cannot be finalized: {cast} of {required} votes cast")]
    VotingIncomplete {
        committee: CommitteeId,
        cast: usize,
        required: usize,
    },

    #[error("Unknown {committee_type} proposal: {type_id}")]
    UnknownProposal {
        committee_type: CommitteeType,
        type_id: u64,
    },

    #[error("{0} is not authorized for this operation")]
    Unauthorized(ValidatorId),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }

    /// Whether the error signals a precondition the caller violated
    /// (as opposed to an internal invariant or a cancelled operation).
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            DomainError::InvalidDraw(_)
                | DomainError::InconsistentCommittee(_)
                | DomainError::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_display() {
        let error = DomainError::Cancelled;
        assert_eq!(error.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::InvalidCommitteeSize.is_cancelled());
    }

    #[test]
    fn test_insufficient_validators_display() {
        let error = DomainError::InsufficientValidators {
            requested: 4,
            available: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient validators: requested 4, only 2 active"
        );
    }

    #[test]
    fn test_unknown_proposal_display() {
        let error = DomainError::UnknownProposal {
            committee_type: CommitteeType::Milestone,
            type_id: 7,
        };
        assert_eq!(error.to_string(), "Unknown milestone proposal: 7");
    }

    #[test]
    fn test_caller_error_classification() {
        let voter = ValidatorId::new("0xabc").unwrap();
        assert!(
            DomainError::AlreadyVoted {
                committee: CommitteeId::new(1),
                validator: voter.clone(),
            }
            .is_caller_error()
        );
        assert!(DomainError::Unauthorized(voter).is_caller_error());
        assert!(!DomainError::InvalidDraw("dup".into()).is_caller_error());
        assert!(!DomainError::InconsistentCommittee("slots".into()).is_caller_error());
        assert!(!DomainError::Cancelled.is_caller_error());
    }
}
