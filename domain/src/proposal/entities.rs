//! Proposal detail types
//!
//! These are read-only views handed back by the external stores that own
//! charity events, milestones and validator applications. The engine never
//! persists them.

use crate::committee::CommitteeType;
use crate::core::identity::{ProfileRef, ValidatorId};
use serde::{Deserialize, Serialize};

/// Status of a proposal in its owning store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub fn from_decision(approved: bool) -> Self {
        if approved {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "Pending"),
            ProposalStatus::Approved => write!(f, "Approved"),
            ProposalStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Charity event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventCategory {
    Health,
    Education,
    Environment,
    DisasterRelief,
    AnimalWelfare,
    #[default]
    Others,
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "health" => Ok(EventCategory::Health),
            "education" => Ok(EventCategory::Education),
            "environment" => Ok(EventCategory::Environment),
            "disasterrelief" => Ok(EventCategory::DisasterRelief),
            "animalwelfare" => Ok(EventCategory::AnimalWelfare),
            "others" | "other" => Ok(EventCategory::Others),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// Charity event metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: u64,
    pub owner: ValidatorId,
    pub name: String,
    pub description: String,
    pub category: EventCategory,
    pub status: ProposalStatus,
}

/// One milestone of a charity event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub event_id: u64,
    pub description: String,
    pub status: ProposalStatus,
}

/// A pending request to join the validator set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorApplication {
    pub id: u64,
    pub applicant: ValidatorId,
    pub profile: ProfileRef,
    pub status: ProposalStatus,
}

/// Resolved detail of whatever a committee is deciding on.
///
/// One variant per [`CommitteeType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProposalDetail {
    Event {
        event: EventDetail,
        milestones: Vec<Milestone>,
    },
    Milestone {
        event_id: u64,
        milestones: Vec<Milestone>,
    },
    Validator(ValidatorApplication),
}

impl ProposalDetail {
    pub fn committee_type(&self) -> CommitteeType {
        match self {
            ProposalDetail::Event { .. } => CommitteeType::Event,
            ProposalDetail::Milestone { .. } => CommitteeType::Milestone,
            ProposalDetail::Validator(_) => CommitteeType::Validator,
        }
    }

    /// One-line description for listings
    pub fn summary(&self) -> String {
        match self {
            ProposalDetail::Event { event, milestones } => format!(
                "{} ({:?}, {} milestones)",
                event.name,
                event.category,
                milestones.len()
            ),
            ProposalDetail::Milestone {
                event_id,
                milestones,
            } => {
                let pending = milestones
                    .iter()
                    .filter(|m| m.status == ProposalStatus::Pending)
                    .count();
                format!(
                    "event {}: {} milestones, {} pending",
                    event_id,
                    milestones.len(),
                    pending
                )
            }
            ProposalDetail::Validator(application) => format!(
                "{} (profile {})",
                application.applicant, application.profile
            ),
        }
    }
}
