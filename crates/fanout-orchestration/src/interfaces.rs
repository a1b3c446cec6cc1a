//! Orchestration interfaces and wire types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use fanout_core::error::ComputeError;
use fanout_core::executor::Strategy;
use fanout_core::observer::TaskUpdate;

/// Request body: `{ "numbers": [..] }`. A missing field is an empty batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub numbers: Vec<i64>,
}

/// Ordered results of one batch, typed by kernel.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Results {
    /// Fibonacci and fixed-width factorial.
    Integers(Vec<i64>),
    /// Primality.
    Booleans(Vec<bool>),
    /// Arbitrary-precision factorial, as decimal text.
    Decimals(Vec<String>),
}

impl Results {
    /// Number of results.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Integers(v) => v.len(),
            Self::Booleans(v) => v.len(),
            Self::Decimals(v) => v.len(),
        }
    }

    /// Whether there are no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render each result as display text, in order.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::Integers(v) => v.iter().map(ToString::to_string).collect(),
            Self::Booleans(v) => v.iter().map(ToString::to_string).collect(),
            Self::Decimals(v) => v.clone(),
        }
    }
}

/// Response body: `{ "results": [..], "execution_time": ".." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Results,
    pub execution_time: String,
}

/// Outcome of running one operation over one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Operation name (e.g. `concurrent_fib`).
    pub operation: String,
    /// Ordered results.
    pub results: Results,
    /// Wall-clock time for the batch.
    pub duration: Duration,
}

impl BatchOutcome {
    /// Build the wire response for this outcome.
    #[must_use]
    pub fn to_response(&self) -> BatchResponse {
        BatchResponse {
            results: self.results.clone(),
            execution_time: format!("{:?}", self.duration),
        }
    }
}

/// One strategy's result in a sequential-vs-concurrent comparison.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// The computed results or a structured error.
    pub outcome: Result<Results, ComputeError>,
    /// Batch duration.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one batch outcome.
    fn present_outcome(&self, outcome: &BatchOutcome, batch: &[i64]);

    /// Present per-task completions in the order they finished.
    fn present_completion_order(&self, updates: &[TaskUpdate]);

    /// Present a strategy comparison.
    fn present_comparison(&self, results: &[ComparisonResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
