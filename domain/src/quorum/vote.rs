//! Ballots and tallies
//!
//! A [`Ballot`] is one member's approve/reject vote with free-text feedback.
//! A [`Tally`] is the count over a set of ballots.

use crate::core::current_timestamp;
use serde::{Deserialize, Serialize};

/// A single committee member's vote
///
/// # Example
///
/// ```
/// use council_domain::Ballot;
///
/// let ballot = Ballot::approve("Receipts match the milestone budget");
/// assert!(ballot.approve);
///
/// let ballot = Ballot::reject("No evidence of delivery");
/// assert!(!ballot.approve);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub approve: bool,
    pub feedback: String,
    /// When the ballot was recorded (milliseconds since epoch)
    pub cast_at: u64,
}

impl Ballot {
    pub fn new(approve: bool, feedback: impl Into<String>) -> Self {
        Self {
            approve,
            feedback: feedback.into(),
            cast_at: current_timestamp(),
        }
    }

    pub fn approve(feedback: impl Into<String>) -> Self {
        Self::new(true, feedback)
    }

    pub fn reject(feedback: impl Into<String>) -> Self {
        Self::new(false, feedback)
    }
}

/// Vote counts for a committee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    pub approve_count: usize,
    pub reject_count: usize,
    pub total_votes: usize,
}

impl Tally {
    pub fn from_ballots<'a>(ballots: impl IntoIterator<Item = &'a Ballot>) -> Self {
        let mut tally = Tally::default();
        for ballot in ballots {
            if ballot.approve {
                tally.approve_count += 1;
            } else {
                tally.reject_count += 1;
            }
            tally.total_votes += 1;
        }
        tally
    }

    /// Strict majority of the votes approve. A tie rejects, and so does an
    /// empty tally.
    ///
    /// ```
    /// use council_domain::{Ballot, Tally};
    ///
    /// let ballots = [Ballot::approve(""), Ballot::approve(""), Ballot::reject("")];
    /// assert!(Tally::from_ballots(&ballots).is_approved());
    ///
    /// let ballots = [Ballot::approve(""), Ballot::reject("")];
    /// assert!(!Tally::from_ballots(&ballots).is_approved());
    /// ```
    pub fn is_approved(&self) -> bool {
        self.approve_count * 2 > self.total_votes
    }
}

/// Visual summary of votes in member order, `?` for members yet to vote
/// (e.g. `[●○?]`)
pub fn vote_summary(votes: impl IntoIterator<Item = Option<bool>>) -> String {
    let mut summary = String::from("[");
    for vote in votes {
        summary.push(match vote {
            Some(true) => '●',
            Some(false) => '○',
            None => '?',
        });
    }
    summary.push(']');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_majority_inputs() {
        let ballots = vec![
            Ballot::approve("ok"),
            Ballot::approve("fine"),
            Ballot::reject("no"),
        ];
        let tally = Tally::from_ballots(&ballots);

        assert_eq!(tally.approve_count, 2);
        assert_eq!(tally.reject_count, 1);
        assert_eq!(tally.total_votes, 3);
        assert!(tally.is_approved());
    }

    #[test]
    fn test_majority_approves() {
        let approvals = |n: usize, total: usize| {
            let ballots: Vec<Ballot> = (0..total)
                .map(|i| Ballot::new(i < n, ""))
                .collect();
            Tally::from_ballots(&ballots).is_approved()
        };

        assert!(approvals(1, 1));
        assert!(approvals(2, 3));
        assert!(approvals(3, 4));
        assert!(approvals(3, 5));

        assert!(!approvals(0, 1));
        assert!(!approvals(1, 3));
        assert!(!approvals(2, 5));
    }

    #[test]
    fn test_ties_and_rejections_never_approve() {
        for total in [2, 4, 6, 10] {
            let tie: Vec<Ballot> = (0..total).map(|i| Ballot::new(i % 2 == 0, "")).collect();
            assert!(!Tally::from_ballots(&tie).is_approved(), "tie of {}", total);

            let rejected: Vec<Ballot> = (0..total).map(|_| Ballot::reject("")).collect();
            assert!(!Tally::from_ballots(&rejected).is_approved(), "0 of {}", total);
        }
    }

    #[test]
    fn test_empty_tally() {
        let tally = Tally::from_ballots(std::iter::empty());
        assert_eq!(tally.total_votes, 0);
        assert!(!tally.is_approved());
    }

    #[test]
    fn test_vote_summary() {
        assert_eq!(vote_summary([Some(true), None, Some(false)]), "[●?○]");
    }
}
