//! Engine parameters: use case behavior control.
//!
//! [`EngineParams`] groups the static parameters that shape committee
//! formation, finalization and proposal dispatch. They are fixed for the
//! lifetime of a [`CouncilState`](crate::state::CouncilState) handle.

use council_domain::{DEFAULT_FEEDBACK_DELIMITER, DecisionAggregator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bound on each external store call unless configured otherwise
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Committee and dispatch parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineParams {
    /// Committee size used when a formation request does not specify one.
    pub committee_size: usize,
    /// Separator placed between member feedback texts.
    pub feedback_delimiter: String,
    /// Bound on each external store call made by dispatch and settlement.
    pub dispatch_timeout: Duration,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            committee_size: 3,
            feedback_delimiter: DEFAULT_FEEDBACK_DELIMITER.to_string(),
            dispatch_timeout: DEFAULT_DISPATCH_TIMEOUT,
        }
    }
}

impl EngineParams {
    // ==================== Builder Methods ====================

    pub fn with_committee_size(mut self, size: usize) -> Self {
        self.committee_size = size;
        self
    }

    pub fn with_feedback_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.feedback_delimiter = delimiter.into();
        self
    }

    pub fn with_dispatch_timeout(mut self, timeout: Duration) -> Self {
        self.dispatch_timeout = timeout;
        self
    }

    /// Aggregator configured with this engine's delimiter
    pub fn aggregator(&self) -> DecisionAggregator {
        DecisionAggregator::new(self.feedback_delimiter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = EngineParams::default();
        assert_eq!(params.committee_size, 3);
        assert_eq!(params.feedback_delimiter, "|");
        assert_eq!(params.dispatch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let params = EngineParams::default()
            .with_committee_size(5)
            .with_feedback_delimiter(" ; ")
            .with_dispatch_timeout(Duration::from_millis(250));

        assert_eq!(params.committee_size, 5);
        assert_eq!(params.aggregator().delimiter(), " ; ");
        assert_eq!(params.dispatch_timeout, Duration::from_millis(250));
    }
}
