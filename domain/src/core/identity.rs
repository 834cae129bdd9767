//! Identity value objects
//!
//! Validators are identified by an address-equivalent handle, committees by a
//! sequential numeric id, and validator profiles by an opaque content hash.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address-equivalent identity of a validator (or of any caller).
///
/// Identities are compared case-insensitively: `0xAbC` and `0xabc` are the
/// same validator. The stored form is trimmed and lowercased.
///
/// # Example
///
/// ```
/// use council_domain::ValidatorId;
///
/// let a = ValidatorId::new("0x13DC81736DdE2c2b788c7634610e549d5fd0C294").unwrap();
/// let b = ValidatorId::new(" 0x13dc81736dde2c2b788c7634610e549d5fd0c294 ").unwrap();
/// assert_eq!(a, b);
/// assert!(ValidatorId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValidatorId(String);

impl ValidatorId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidIdentity(raw.as_ref().to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for console output (e.g. `0x13dc…c294`)
    pub fn short(&self) -> String {
        if self.0.len() <= 12 || !self.0.is_ascii() {
            return self.0.clone();
        }
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ValidatorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ValidatorId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ValidatorId> for String {
    fn from(id: ValidatorId) -> Self {
        id.0
    }
}

/// Opaque pointer to an off-chain validator profile document (e.g. an IPFS CID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRef(String);

impl ProfileRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential committee identifier, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitteeId(u64);

impl CommitteeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
