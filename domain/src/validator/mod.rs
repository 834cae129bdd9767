//! Validator registry domain
//!
//! Validators are the eligible pool for committee sortition. Membership is
//! governed by a role flag; entries are never deleted.

pub mod entities;
pub mod registry;

pub use entities::{Validator, ValidatorRole};
pub use registry::ValidatorRegistry;
