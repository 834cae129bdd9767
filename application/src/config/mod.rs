//! Application-level configuration.
//!
//! - [`EngineParams`]: committee size, feedback delimiter, dispatch timeout

pub mod engine_params;

pub use engine_params::{DEFAULT_DISPATCH_TIMEOUT, EngineParams};
