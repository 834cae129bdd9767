//! Committee type: which proposal domain a committee decides for

use serde::{Deserialize, Serialize};

/// Closed set of proposal domains a committee can be formed for.
///
/// Adding a variant forces every `match` on it (dispatch, settlement,
/// labels) to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitteeType {
    /// Approval of a new charity event
    Event,
    /// Approval of a milestone completion
    Milestone,
    /// Approval of a validator applicant
    Validator,
}

impl CommitteeType {
    pub const ALL: [CommitteeType; 3] = [
        CommitteeType::Event,
        CommitteeType::Milestone,
        CommitteeType::Validator,
    ];

    /// Wire name (`event`, `milestone`, `validator`)
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitteeType::Event => "event",
            CommitteeType::Milestone => "milestone",
            CommitteeType::Validator => "validator",
        }
    }

    /// Human-readable label for listings
    pub fn label(&self) -> &'static str {
        match self {
            CommitteeType::Event => "Charity Event",
            CommitteeType::Milestone => "Milestone Completion",
            CommitteeType::Validator => "Validator Application",
        }
    }
}

impl std::fmt::Display for CommitteeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitteeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "event" => Ok(CommitteeType::Event),
            "milestone" => Ok(CommitteeType::Milestone),
            "validator" => Ok(CommitteeType::Validator),
            other => Err(format!(
                "Unknown committee type: {}. Valid: event, milestone, validator",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_wire_names() {
        for committee_type in CommitteeType::ALL {
            assert_eq!(
                committee_type.as_str().parse::<CommitteeType>(),
                Ok(committee_type)
            );
        }
        assert_eq!("Milestone".parse::<CommitteeType>(), Ok(CommitteeType::Milestone));
        assert!("donation".parse::<CommitteeType>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CommitteeType::Event.label(), "Charity Event");
        assert_eq!(CommitteeType::Milestone.label(), "Milestone Completion");
        assert_eq!(CommitteeType::Validator.label(), "Validator Application");
    }
}
