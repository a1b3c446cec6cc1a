//! Concrete observer implementations.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::observer::{BatchSummary, ExecutionObserver, TaskUpdate};

/// Observer that ignores all notifications.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionObserver for NoOpObserver {
    fn on_task_complete(&self, _update: &TaskUpdate) {}
}

/// Observer that logs every task completion at `debug` and the batch at `info`.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionObserver for LoggingObserver {
    fn on_task_complete(&self, update: &TaskUpdate) {
        debug!(
            index = update.index,
            input = update.input,
            result = %update.result,
            elapsed = ?update.elapsed,
            "task complete"
        );
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        info!(
            kernel = summary.kernel,
            strategy = summary.strategy,
            size = summary.size,
            elapsed = ?summary.elapsed,
            "batch complete"
        );
    }
}

/// Observer that records task completions in the order they arrive.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    updates: Mutex<Vec<TaskUpdate>>,
    batches: Mutex<Vec<BatchSummary>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Task updates in completion order.
    #[must_use]
    pub fn updates(&self) -> Vec<TaskUpdate> {
        self.updates.lock().clone()
    }

    /// Batch summaries in completion order.
    #[must_use]
    pub fn batches(&self) -> Vec<BatchSummary> {
        self.batches.lock().clone()
    }

    /// Number of task completions seen so far.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.updates.lock().len()
    }
}

impl ExecutionObserver for RecordingObserver {
    fn on_task_complete(&self, update: &TaskUpdate) {
        self.updates.lock().push(update.clone());
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        self.batches.lock().push(*summary);
    }
}

/// Forwards every notification to two observers.
pub struct TeeObserver<'a> {
    first: &'a dyn ExecutionObserver,
    second: &'a dyn ExecutionObserver,
}

impl<'a> TeeObserver<'a> {
    #[must_use]
    pub fn new(first: &'a dyn ExecutionObserver, second: &'a dyn ExecutionObserver) -> Self {
        Self { first, second }
    }
}

impl ExecutionObserver for TeeObserver<'_> {
    fn on_task_complete(&self, update: &TaskUpdate) {
        self.first.on_task_complete(update);
        self.second.on_task_complete(update);
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        self.first.on_batch_complete(summary);
        self.second.on_batch_complete(summary);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn noop_observer() {
        let observer = NoOpObserver::new();
        observer.on_task_complete(&TaskUpdate::new(0, 1, 1, Duration::ZERO));
    }

    #[test]
    fn logging_observer_does_not_panic() {
        let observer = LoggingObserver::new();
        observer.on_task_complete(&TaskUpdate::new(0, 5, 120, Duration::from_micros(3)));
        observer.on_batch_complete(&BatchSummary {
            kernel: "Factorial",
            strategy: "linear",
            size: 1,
            elapsed: Duration::from_micros(4),
        });
    }

    #[test]
    fn recording_observer_keeps_arrival_order() {
        let observer = RecordingObserver::new();
        observer.on_task_complete(&TaskUpdate::new(2, 30, 832_040, Duration::ZERO));
        observer.on_task_complete(&TaskUpdate::new(0, 10, 55, Duration::ZERO));
        let indices: Vec<usize> = observer.updates().iter().map(|u| u.index).collect();
        assert_eq!(indices, vec![2, 0]);
        assert_eq!(observer.updates()[1].result, "55");
        assert_eq!(observer.completed(), 2);
        assert!(observer.batches().is_empty());
    }

    #[test]
    fn tee_observer_forwards_to_both() {
        let a = RecordingObserver::new();
        let b = RecordingObserver::new();
        let tee = TeeObserver::new(&a, &b);
        tee.on_task_complete(&TaskUpdate::new(0, 1, 1, Duration::ZERO));
        tee.on_batch_complete(&BatchSummary {
            kernel: "Fibonacci",
            strategy: "concurrent",
            size: 1,
            elapsed: Duration::ZERO,
        });
        assert_eq!(a.completed(), 1);
        assert_eq!(b.completed(), 1);
        assert_eq!(a.batches().len(), 1);
        assert_eq!(b.batches().len(), 1);
    }
}
