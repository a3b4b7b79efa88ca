//! Configuration options for a pipeline run.

use serde::{Deserialize, Serialize};

/// Number of customers reported in the ranking by default.
pub const DEFAULT_TOP_N: usize = 5;

/// What to do when the duplicate adjustment would push the unused count below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnusedCountPolicy {
    /// Report zero and log a warning.
    #[default]
    Clamp,
    /// Abort the run with [`crate::PipelineError::UnusedCountUnderflow`].
    Strict,
}

/// Options controlling pipeline behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// How many customers to keep in the top-customer ranking.
    pub top_n: usize,
    pub unused_policy: UnusedCountPolicy,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            unused_policy: UnusedCountPolicy::default(),
        }
    }
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_unused_policy(mut self, policy: UnusedCountPolicy) -> Self {
        self.unused_policy = policy;
        self
    }
}
