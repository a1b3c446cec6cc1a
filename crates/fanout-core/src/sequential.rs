//! Sequential executor: the baseline.

use std::time::Instant;

use crate::constants::{DEFAULT_TASK_STACK, INLINE_STACK_NEED};
use crate::error::ComputeError;
use crate::executor::{stack_need, ExecutionReport, Executor};
use crate::kernel::Kernel;
use crate::observer::{ExecutionObserver, TaskUpdate};

/// Visits the batch in index order, one element at a time.
///
/// Wall time is the sum of the per-element costs. The batch runs on the
/// calling thread unless some element needs more stack than
/// [`INLINE_STACK_NEED`]; then it runs on one dedicated thread sized for
/// the deepest element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn execute<K: Kernel>(
        &self,
        kernel: &K,
        batch: &[i64],
        observer: &dyn ExecutionObserver,
    ) -> Result<ExecutionReport<K::Output>, ComputeError> {
        let mut deepest = 0;
        for (index, &input) in batch.iter().enumerate() {
            deepest = deepest.max(stack_need(kernel, index, input)?);
        }

        if deepest <= INLINE_STACK_NEED {
            return Ok(run_in_order(kernel, batch, observer));
        }

        crossbeam::thread::scope(|scope| -> Result<ExecutionReport<K::Output>, ComputeError> {
            scope
                .builder()
                .name(format!("fanout-{}-linear", kernel.name()))
                .stack_size(DEFAULT_TASK_STACK + deepest)
                .spawn(move |_| run_in_order(kernel, batch, observer))
                .map_err(|e| ComputeError::Spawn {
                    index: 0,
                    reason: e.to_string(),
                })?
                .join()
                .map_err(|_| ComputeError::TaskPanicked)
        })
        .map_err(|_| ComputeError::TaskPanicked)?
    }
}

fn run_in_order<K: Kernel>(
    kernel: &K,
    batch: &[i64],
    observer: &dyn ExecutionObserver,
) -> ExecutionReport<K::Output> {
    let start = Instant::now();
    let mut results = Vec::with_capacity(batch.len());

    for (index, &input) in batch.iter().enumerate() {
        let task_start = Instant::now();
        let value = kernel.compute(input);
        observer.on_task_complete(&TaskUpdate::new(
            index,
            input,
            &value,
            task_start.elapsed(),
        ));
        results.push(value);
    }

    ExecutionReport::new(results, start.elapsed())
}
