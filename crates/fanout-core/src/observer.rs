//! Observer hooks for per-element task completion.
//!
//! Executors notify an observer each time one batch element finishes. The
//! concurrent executor calls the observer from the task's own thread, so
//! notifications arrive in completion order, not index order. Observers
//! never influence results.

use std::fmt;
use std::time::Duration;

/// Notification that one batch element has been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Index of the element in the batch.
    pub index: usize,
    /// The input value at that index.
    pub input: i64,
    /// The computed result, rendered for display.
    pub result: String,
    /// Time spent computing this element.
    pub elapsed: Duration,
}

impl TaskUpdate {
    /// Create a new task update.
    #[must_use]
    pub fn new(index: usize, input: i64, result: impl fmt::Display, elapsed: Duration) -> Self {
        Self {
            index,
            input,
            result: result.to_string(),
            elapsed,
        }
    }
}

/// Summary emitted once a whole batch is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Kernel name.
    pub kernel: &'static str,
    /// Strategy name.
    pub strategy: &'static str,
    /// Number of elements processed.
    pub size: usize,
    /// Wall-clock time for the batch.
    pub elapsed: Duration,
}

/// Observer trait for receiving task completions.
///
/// Must be `Sync`: the concurrent executor shares one observer across
/// every task thread.
pub trait ExecutionObserver: Send + Sync {
    /// Called once per element, from the thread that computed it.
    fn on_task_complete(&self, update: &TaskUpdate);

    /// Called once per batch after the last element is available.
    fn on_batch_complete(&self, _summary: &BatchSummary) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_update_fields() {
        let update = TaskUpdate::new(3, 35, 9_227_465, Duration::from_millis(12));
        assert_eq!(update.index, 3);
        assert_eq!(update.input, 35);
        assert_eq!(update.result, "9227465");
        assert_eq!(update.elapsed, Duration::from_millis(12));
    }
}
