//! Sortition: random committee formation
//!
//! Selection is uniform without replacement over the active pool. Weighting
//! by stake or reputation is not modelled.

pub mod draw;
pub mod randomness;

pub use draw::draw_committee;
pub use randomness::{RandomnessSource, SeededRandomness};
