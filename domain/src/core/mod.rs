//! Core domain concepts shared across all subdomains.
//!
//! - [`identity::ValidatorId`]: address-equivalent validator identity
//! - [`identity::CommitteeId`]: sequential committee identifier
//! - [`identity::ProfileRef`]: opaque off-chain profile pointer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod identity;

/// Current timestamp in milliseconds since the Unix epoch
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
