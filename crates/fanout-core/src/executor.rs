//! Execution strategies: how a kernel is applied across a batch.
//!
//! Both strategies uphold the same contract: `results[i]` is the kernel's
//! output for `batch[i]`, whatever order the elements finish in.

use std::fmt;
use std::time::Duration;

use crate::concurrent::ConcurrentExecutor;
use crate::constants::MAX_TASK_STACK;
use crate::error::ComputeError;
use crate::kernel::Kernel;
use crate::observer::{BatchSummary, ExecutionObserver};
use crate::sequential::SequentialExecutor;

/// Ordered results of one batch plus the wall-clock time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport<T> {
    /// `results[i]` corresponds to `batch[i]`.
    pub results: Vec<T>,
    /// Time from the start of processing until every result was available.
    pub elapsed: Duration,
}

impl<T> ExecutionReport<T> {
    #[must_use]
    pub fn new(results: Vec<T>, elapsed: Duration) -> Self {
        Self { results, elapsed }
    }

    /// Elapsed time rendered as a duration string, e.g. `"1.5ms"`.
    #[must_use]
    pub fn execution_time(&self) -> String {
        format!("{:?}", self.elapsed)
    }

    /// Convert every result, keeping order and elapsed time.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ExecutionReport<U> {
        ExecutionReport {
            results: self.results.into_iter().map(f).collect(),
            elapsed: self.elapsed,
        }
    }
}

/// A strategy for applying a kernel to every element of a batch.
pub trait Executor: Send + Sync {
    /// Strategy name (`"linear"` or `"concurrent"`).
    fn name(&self) -> &'static str;

    /// Apply `kernel` to `batch`, notifying `observer` per element.
    fn execute<K: Kernel>(
        &self,
        kernel: &K,
        batch: &[i64],
        observer: &dyn ExecutionObserver,
    ) -> Result<ExecutionReport<K::Output>, ComputeError>;
}

/// Extra stack the task computing `batch[index]` needs, or `TooDeep` when
/// that exceeds [`MAX_TASK_STACK`].
pub(crate) fn stack_need<K: Kernel>(
    kernel: &K,
    index: usize,
    input: i64,
) -> Result<usize, ComputeError> {
    let need = kernel.stack_bytes(input);
    if need > MAX_TASK_STACK {
        return Err(ComputeError::TooDeep { index, input });
    }
    Ok(need)
}

/// Identifies an execution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One element at a time, in index order.
    Sequential,
    /// One concurrent task per element, joined on a wait-group.
    Concurrent,
}

impl Strategy {
    /// Both strategies, baseline first.
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Concurrent];

    /// Strategy name as used in operation names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => SequentialExecutor.name(),
            Self::Concurrent => ConcurrentExecutor.name(),
        }
    }

    /// Run `kernel` over `batch` with this strategy.
    ///
    /// Emits a [`BatchSummary`] to the observer once the batch is done.
    pub fn run<K: Kernel>(
        self,
        kernel: &K,
        batch: &[i64],
        observer: &dyn ExecutionObserver,
    ) -> Result<ExecutionReport<K::Output>, ComputeError> {
        let report = match self {
            Self::Sequential => SequentialExecutor.execute(kernel, batch, observer)?,
            Self::Concurrent => ConcurrentExecutor.execute(kernel, batch, observer)?,
        };
        observer.on_batch_complete(&BatchSummary {
            kernel: kernel.name(),
            strategy: self.name(),
            size: batch.len(),
            elapsed: report.elapsed,
        });
        Ok(report)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
