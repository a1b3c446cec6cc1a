//! Concurrent executor: fan-out one task per element, fan-in on a wait-group.
//!
//! The result buffer is allocated with one slot per element before any task
//! starts. Each task receives an exclusive `&mut` borrow of its own slot, so
//! the tasks never contend on the buffer and no lock guards it. Fan-in is a
//! `WaitGroup` holding one handle per task: a task drops its handle when it
//! finishes (also while unwinding), and the caller's `wait()` returns once
//! the last handle is gone.
//!
//! The number of tasks is not bounded. A batch of N elements starts N
//! threads. Each thread's stack is sized from its kernel's stack need; an
//! element needing more than `MAX_TASK_STACK` fails the batch with
//! `TooDeep` before any thread starts.

use std::time::{Duration, Instant};

use crossbeam::sync::WaitGroup;
use tracing::{trace, warn};

use crate::constants::DEFAULT_TASK_STACK;
use crate::error::ComputeError;
use crate::executor::{stack_need, ExecutionReport, Executor};
use crate::kernel::Kernel;
use crate::observer::{ExecutionObserver, TaskUpdate};

/// Launches one scoped thread per batch element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentExecutor;

impl Executor for ConcurrentExecutor {
    fn name(&self) -> &'static str {
        "concurrent"
    }

    fn execute<K: Kernel>(
        &self,
        kernel: &K,
        batch: &[i64],
        observer: &dyn ExecutionObserver,
    ) -> Result<ExecutionReport<K::Output>, ComputeError> {
        let needs = batch
            .iter()
            .enumerate()
            .map(|(index, &input)| stack_need(kernel, index, input))
            .collect::<Result<Vec<_>, _>>()?;

        let mut slots: Vec<Option<K::Output>> = Vec::with_capacity(batch.len());
        slots.resize_with(batch.len(), || None);

        let start = Instant::now();
        let pending = WaitGroup::new();

        let launched = crossbeam::thread::scope(|scope| -> Result<Duration, ComputeError> {
            let tasks = slots.iter_mut().zip(batch).zip(needs);
            for (index, ((slot, &input), need)) in tasks.enumerate() {
                let done = pending.clone();
                scope
                    .builder()
                    .name(format!("fanout-{}-{index}", kernel.name()))
                    .stack_size(DEFAULT_TASK_STACK + need)
                    .spawn(move |_| {
                        let task_start = Instant::now();
                        let value = kernel.compute(input);
                        let update = TaskUpdate::new(index, input, &value, task_start.elapsed());
                        *slot = Some(value);
                        observer.on_task_complete(&update);
                        drop(done);
                    })
                    .map_err(|e| ComputeError::Spawn {
                        index,
                        reason: e.to_string(),
                    })?;
            }
            trace!(tasks = batch.len(), "all tasks launched");
            pending.wait();
            Ok(start.elapsed())
        });

        let elapsed = match launched {
            Ok(Ok(elapsed)) => elapsed,
            Ok(Err(e)) => {
                warn!(error = %e, "fan-out aborted");
                return Err(e);
            }
            Err(_) => {
                warn!(kernel = kernel.name(), "concurrent task panicked");
                return Err(ComputeError::TaskPanicked);
            }
        };

        let results = slots
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(ComputeError::TaskPanicked)?;

        Ok(ExecutionReport::new(results, elapsed))
    }
}
