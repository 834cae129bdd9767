//! Committee entity and its voting state machine
//!
//! ```text
//!   Formed ──first vote──▶ Voting ──last vote──▶ Decided (terminal)
//! ```
//!
//! Formed and Voting both accept votes; the distinction is informational.
//! The transition to Decided happens inside [`Committee::cast_vote`] when the
//! vote count reaches the committee size.

use super::aggregator::{DecisionAggregator, FinalDecision};
use super::committee_type::CommitteeType;
use crate::core::error::DomainError;
use crate::core::identity::{CommitteeId, ValidatorId};
use crate::quorum::{Ballot, Tally};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lifecycle phase of a committee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitteePhase {
    Formed,
    Voting,
    Decided,
}

impl CommitteePhase {
    pub fn accepts_votes(&self) -> bool {
        !matches!(self, CommitteePhase::Decided)
    }
}

impl std::fmt::Display for CommitteePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitteePhase::Formed => write!(f, "Formed"),
            CommitteePhase::Voting => write!(f, "Voting"),
            CommitteePhase::Decided => write!(f, "Decided"),
        }
    }
}

/// Result of a successfully recorded vote
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// The vote was stored; the committee is still open
    Recorded { votes_cast: usize, remaining: usize },
    /// The vote was the last one and the committee is now decided
    Decided(FinalDecision),
}

impl VoteOutcome {
    pub fn is_decided(&self) -> bool {
        matches!(self, VoteOutcome::Decided(_))
    }
}

/// One delegated decision: a fixed roster of validators and their ballots.
///
/// `ballots[i]` belongs to `members[i]`, so ballots are always kept in
/// member-assignment order regardless of submission order. Deserialization
/// goes through [`CommitteeSnapshot`] and re-checks that alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CommitteeSnapshot")]
pub struct Committee {
    id: CommitteeId,
    committee_type: CommitteeType,
    type_id: u64,
    members: Vec<ValidatorId>,
    ballots: Vec<Option<Ballot>>,
    decision: Option<FinalDecision>,
    created_at: u64,
}

/// Stored form of a [`Committee`]
#[derive(Debug, Deserialize)]
pub struct CommitteeSnapshot {
    id: CommitteeId,
    committee_type: CommitteeType,
    type_id: u64,
    members: Vec<ValidatorId>,
    ballots: Vec<Option<Ballot>>,
    decision: Option<FinalDecision>,
    created_at: u64,
}

impl TryFrom<CommitteeSnapshot> for Committee {
    type Error = DomainError;

    fn try_from(snapshot: CommitteeSnapshot) -> Result<Self, Self::Error> {
        let mut committee = Committee::new(
            snapshot.id,
            snapshot.committee_type,
            snapshot.type_id,
            snapshot.members,
            snapshot.created_at,
        )?;
        if snapshot.ballots.len() != committee.size() {
            return Err(DomainError::InconsistentCommittee(format!(
                "committee {} has {} members but {} ballot slots",
                committee.id,
                committee.size(),
                snapshot.ballots.len()
            )));
        }
        committee.ballots = snapshot.ballots;
        if snapshot.decision.is_some() && committee.votes_cast() != committee.size() {
            return Err(DomainError::InconsistentCommittee(format!(
                "committee {} is decided with {} of {} votes",
                committee.id,
                committee.votes_cast(),
                committee.size()
            )));
        }
        committee.decision = snapshot.decision;
        Ok(committee)
    }
}

impl Committee {
    /// Create a committee in the Formed phase.
    ///
    /// Fails if the roster is empty or lists a validator twice.
    pub fn new(
        id: CommitteeId,
        committee_type: CommitteeType,
        type_id: u64,
        members: Vec<ValidatorId>,
        created_at: u64,
    ) -> Result<Self, DomainError> {
        if members.is_empty() {
            return Err(DomainError::InvalidCommitteeSize);
        }
        let mut seen = HashSet::with_capacity(members.len());
        if let Some(dup) = members.iter().find(|m| !seen.insert(*m)) {
            return Err(DomainError::InvalidDraw(format!(
                "{} appears twice in the roster",
                dup
            )));
        }

        let ballots = vec![None; members.len()];
        Ok(Self {
            id,
            committee_type,
            type_id,
            members,
            ballots,
            decision: None,
            created_at,
        })
    }

    /// Record a member's vote.
    ///
    /// Finality is checked first, then membership, then single-vote. When
    /// this vote completes the roster, `aggregator` finalizes the committee.
    pub fn cast_vote(
        &mut self,
        voter: &ValidatorId,
        approve: bool,
        feedback: impl Into<String>,
        aggregator: &DecisionAggregator,
    ) -> Result<VoteOutcome, DomainError> {
        if !self.phase().accepts_votes() {
            return Err(DomainError::CommitteeAlreadyDecided(self.id));
        }
        let slot = self
            .member_index(voter)
            .ok_or_else(|| DomainError::NotCommitteeMember {
                committee: self.id,
                validator: voter.clone(),
            })?;
        if self.ballots[slot].is_some() {
            return Err(DomainError::AlreadyVoted {
                committee: self.id,
                validator: voter.clone(),
            });
        }

        self.ballots[slot] = Some(Ballot::new(approve, feedback));

        let votes_cast = self.votes_cast();
        if votes_cast == self.size() {
            let decision = aggregator.finalize(self)?;
            return Ok(VoteOutcome::Decided(decision));
        }
        Ok(VoteOutcome::Recorded {
            votes_cast,
            remaining: self.size() - votes_cast,
        })
    }

    /// Single terminal write, called by the aggregator
    pub(super) fn seal(&mut self, decision: FinalDecision) {
        self.decision = Some(decision);
    }

    pub fn id(&self) -> CommitteeId {
        self.id
    }

    pub fn committee_type(&self) -> CommitteeType {
        self.committee_type
    }

    /// Foreign key into the owning domain's proposal
    pub fn type_id(&self) -> u64 {
        self.type_id
    }

    pub fn members(&self) -> &[ValidatorId] {
        &self.members
    }

    /// Ballot slots aligned with [`members`](Self::members)
    pub fn ballots(&self) -> &[Option<Ballot>] {
        &self.ballots
    }

    pub fn decision(&self) -> Option<&FinalDecision> {
        self.decision.as_ref()
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn votes_cast(&self) -> usize {
        self.ballots.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_completed(&self) -> bool {
        self.decision.is_some()
    }

    pub fn phase(&self) -> CommitteePhase {
        if self.is_completed() {
            CommitteePhase::Decided
        } else if self.votes_cast() > 0 {
            CommitteePhase::Voting
        } else {
            CommitteePhase::Formed
        }
    }

    pub fn is_member(&self, id: &ValidatorId) -> bool {
        self.member_index(id).is_some()
    }

    pub fn has_voted(&self, id: &ValidatorId) -> bool {
        self.member_index(id)
            .is_some_and(|slot| self.ballots[slot].is_some())
    }

    /// Tally of the ballots recorded so far
    pub fn tally(&self) -> Tally {
        Tally::from_ballots(self.ballots.iter().flatten())
    }

    fn member_index(&self, id: &ValidatorId) -> Option<usize> {
        self.members.iter().position(|m| m == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ValidatorId {
        ValidatorId::new(raw).unwrap()
    }

    fn committee(members: &[&str]) -> Committee {
        Committee::new(
            CommitteeId::new(1),
            CommitteeType::Milestone,
            7,
            members.iter().map(|m| id(m)).collect(),
            100,
        )
        .unwrap()
    }

    #[test]
    fn test_new_committee_is_formed() {
        let committee = committee(&["0xa", "0xb", "0xc"]);
        assert_eq!(committee.phase(), CommitteePhase::Formed);
        assert_eq!(committee.size(), 3);
        assert_eq!(committee.votes_cast(), 0);
        assert!(!committee.is_completed());
        assert!(committee.decision().is_none());
    }

    #[test]
    fn test_new_rejects_empty_and_duplicate_rosters() {
        let empty = Committee::new(
            CommitteeId::new(1),
            CommitteeType::Event,
            1,
            vec![],
            100,
        );
        assert_eq!(empty.unwrap_err(), DomainError::InvalidCommitteeSize);

        let dup = Committee::new(
            CommitteeId::new(1),
            CommitteeType::Event,
            1,
            vec![id("0xa"), id("0xA")],
            100,
        );
        assert!(matches!(dup, Err(DomainError::InvalidDraw(_))));
    }

    #[test]
    fn test_first_vote_moves_to_voting() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb", "0xc"]);

        let outcome = committee
            .cast_vote(&id("0xb"), true, "ok", &aggregator)
            .unwrap();

        assert_eq!(
            outcome,
            VoteOutcome::Recorded {
                votes_cast: 1,
                remaining: 2
            }
        );
        assert_eq!(committee.phase(), CommitteePhase::Voting);
        assert!(committee.has_voted(&id("0xb")));
        assert!(!committee.has_voted(&id("0xa")));
    }

    #[test]
    fn test_non_member_is_rejected() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb"]);

        let err = committee
            .cast_vote(&id("0xz"), true, "sneaky", &aggregator)
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::NotCommitteeMember {
                committee: CommitteeId::new(1),
                validator: id("0xz"),
            }
        );
        assert_eq!(committee.votes_cast(), 0);
    }

    #[test]
    fn test_second_vote_is_rejected() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb", "0xc"]);

        committee
            .cast_vote(&id("0xa"), true, "first", &aggregator)
            .unwrap();
        let err = committee
            .cast_vote(&id("0xa"), false, "changed my mind", &aggregator)
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyVoted { .. }));
        // The first ballot is untouched
        let ballot = committee.ballots()[0].as_ref().unwrap();
        assert!(ballot.approve);
        assert_eq!(ballot.feedback, "first");
    }

    #[test]
    fn test_decides_exactly_on_last_vote() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb", "0xc"]);

        assert!(!committee
            .cast_vote(&id("0xa"), true, "ok", &aggregator)
            .unwrap()
            .is_decided());
        assert!(!committee
            .cast_vote(&id("0xb"), true, "fine", &aggregator)
            .unwrap()
            .is_decided());
        assert!(!committee.is_completed());

        let outcome = committee
            .cast_vote(&id("0xc"), false, "no", &aggregator)
            .unwrap();

        let VoteOutcome::Decided(decision) = outcome else {
            panic!("expected a decision");
        };
        assert!(decision.approved);
        assert_eq!(decision.concatenated_feedback, "ok|fine|no");
        assert_eq!(committee.phase(), CommitteePhase::Decided);
    }

    #[test]
    fn test_no_votes_after_decision() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa"]);

        committee
            .cast_vote(&id("0xa"), false, "no", &aggregator)
            .unwrap();

        // Even a member who already voted gets the finality error first
        assert_eq!(
            committee
                .cast_vote(&id("0xa"), true, "again", &aggregator)
                .unwrap_err(),
            DomainError::CommitteeAlreadyDecided(CommitteeId::new(1))
        );
        assert_eq!(
            committee
                .cast_vote(&id("0xz"), true, "late", &aggregator)
                .unwrap_err(),
            DomainError::CommitteeAlreadyDecided(CommitteeId::new(1))
        );
    }

    #[test]
    fn test_ballots_follow_member_order() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb", "0xc"]);

        committee
            .cast_vote(&id("0xc"), false, "third", &aggregator)
            .unwrap();
        committee
            .cast_vote(&id("0xa"), true, "first", &aggregator)
            .unwrap();
        let outcome = committee
            .cast_vote(&id("0xb"), true, "second", &aggregator)
            .unwrap();

        let VoteOutcome::Decided(decision) = outcome else {
            panic!("expected a decision");
        };
        assert_eq!(decision.concatenated_feedback, "first|second|third");
    }

    #[test]
    fn test_tally_while_voting() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb", "0xc"]);
        committee
            .cast_vote(&id("0xa"), false, "", &aggregator)
            .unwrap();

        let tally = committee.tally();
        assert_eq!(tally.reject_count, 1);
        assert_eq!(tally.total_votes, 1);
    }

    #[test]
    fn test_stored_committee_round_trips() {
        let aggregator = DecisionAggregator::default();
        let mut committee = committee(&["0xa", "0xb"]);
        committee
            .cast_vote(&id("0xb"), true, "ok", &aggregator)
            .unwrap();

        let json = serde_json::to_string(&committee).unwrap();
        let mut restored: Committee = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.created_at(), 100);
        assert!(restored.has_voted(&id("0xb")));
        assert!(restored
            .cast_vote(&id("0xa"), false, "no", &aggregator)
            .unwrap()
            .is_decided());
    }

    #[test]
    fn test_stored_committee_with_misaligned_ballots_is_rejected() {
        let mut json = serde_json::to_value(committee(&["0xa", "0xb", "0xc"])).unwrap();
        json["ballots"] = serde_json::json!([null]);

        let err = serde_json::from_value::<Committee>(json).unwrap_err();
        assert!(err.to_string().contains("3 members but 1 ballot slots"));
    }

    #[test]
    fn test_stored_committee_decided_without_all_votes_is_rejected() {
        let aggregator = DecisionAggregator::default();
        let mut decided = committee(&["0xa"]);
        decided
            .cast_vote(&id("0xa"), true, "ok", &aggregator)
            .unwrap();
        let mut json = serde_json::to_value(committee(&["0xa", "0xb"])).unwrap();
        json["decision"] = serde_json::to_value(decided.decision()).unwrap();

        assert!(serde_json::from_value::<Committee>(json).is_err());
    }

    #[test]
    fn test_stored_committee_with_duplicate_members_is_rejected() {
        let mut json = serde_json::to_value(committee(&["0xa", "0xb"])).unwrap();
        json["members"] = serde_json::json!(["0xa", "0xa"]);

        assert!(serde_json::from_value::<Committee>(json).is_err());
    }
}
