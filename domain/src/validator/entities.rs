//! Validator entity

use crate::core::current_timestamp;
use crate::core::identity::{ProfileRef, ValidatorId};
use serde::{Deserialize, Serialize};

/// Eligibility flag of a registered validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorRole {
    #[default]
    Active,
    Revoked,
}

impl ValidatorRole {
    pub fn is_active(&self) -> bool {
        matches!(self, ValidatorRole::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorRole::Active => "active",
            ValidatorRole::Revoked => "revoked",
        }
    }
}

impl std::fmt::Display for ValidatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered validator.
///
/// Validators are never removed from the registry; revocation only flips
/// [`ValidatorRole`], which is what sortition looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub id: ValidatorId,
    pub role: ValidatorRole,
    /// Off-chain profile document, if one was supplied
    pub profile: Option<ProfileRef>,
    /// Registration time (milliseconds since epoch)
    pub registered_at: u64,
}

impl Validator {
    pub fn new(id: ValidatorId, profile: Option<ProfileRef>) -> Self {
        Self {
            id,
            role: ValidatorRole::Active,
            profile,
            registered_at: current_timestamp(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.role.is_active()
    }
}
