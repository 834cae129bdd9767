//! Voting primitives
//!
//! Ballots and tallies. These types know nothing about committees; the
//! committee module turns a complete tally into a verdict once every member
//! has voted.

pub mod vote;

pub use vote::{Ballot, Tally, vote_summary};
