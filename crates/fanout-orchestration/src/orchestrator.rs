//! Core orchestration: dispatch an operation to its kernel and strategy,
//! and cross-validate the two strategies.

use std::time::Instant;

use tracing::{debug, info};

use fanout_core::error::ComputeError;
use fanout_core::executor::Strategy;
use fanout_core::factorial::{BigFactorial, Factorial};
use fanout_core::fibonacci::Fibonacci;
use fanout_core::kernel::KernelKind;
use fanout_core::observer::ExecutionObserver;
use fanout_core::operation::Operation;
use fanout_core::primality::PrimalityCheck;

use crate::interfaces::{BatchOutcome, ComparisonResult, Results};

/// Run `kernel` over `batch` with `strategy` and type the results.
pub fn execute_kernel(
    kernel: KernelKind,
    strategy: Strategy,
    batch: &[i64],
    observer: &dyn ExecutionObserver,
) -> Result<BatchOutcome, ComputeError> {
    let (results, duration) = match kernel {
        KernelKind::Factorial => {
            let report = strategy.run(&Factorial::new(), batch, observer)?;
            (Results::Integers(report.results), report.elapsed)
        }
        KernelKind::BigFactorial => {
            let report = strategy
                .run(&BigFactorial::new(), batch, observer)?
                .map(|v| v.to_string());
            (Results::Decimals(report.results), report.elapsed)
        }
        KernelKind::Fibonacci => {
            let report = strategy.run(&Fibonacci::new(), batch, observer)?;
            (Results::Integers(report.results), report.elapsed)
        }
        KernelKind::PrimalityCheck => {
            let report = strategy.run(&PrimalityCheck::new(), batch, observer)?;
            (Results::Booleans(report.results), report.elapsed)
        }
    };

    Ok(BatchOutcome {
        operation: format!("{strategy}_{kernel}"),
        results,
        duration,
    })
}

/// Execute one named operation.
pub fn execute_operation(
    operation: Operation,
    batch: &[i64],
    observer: &dyn ExecutionObserver,
) -> Result<BatchOutcome, ComputeError> {
    let mut outcome = execute_kernel(operation.kernel(), operation.strategy(), batch, observer)?;
    outcome.operation = operation.name().to_string();

    info!(
        operation = operation.name(),
        size = batch.len(),
        elapsed = ?outcome.duration,
        "operation complete"
    );
    Ok(outcome)
}

/// Run `kernel` over `batch` with both strategies, baseline first.
///
/// Strategies run one after the other so their timings do not interfere.
pub fn execute_comparison(
    kernel: KernelKind,
    batch: &[i64],
    observer: &dyn ExecutionObserver,
) -> Vec<ComparisonResult> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let start = Instant::now();
            let outcome = execute_kernel(kernel, strategy, batch, observer);
            let duration = outcome
                .as_ref()
                .map_or_else(|_| start.elapsed(), |o| o.duration);
            debug!(%kernel, %strategy, elapsed = ?duration, "comparison leg complete");
            ComparisonResult {
                strategy,
                outcome: outcome.map(|o| o.results),
                duration,
            }
        })
        .collect()
}

/// Run both strategies and check that they agree.
pub fn compare_strategies(
    kernel: KernelKind,
    batch: &[i64],
    observer: &dyn ExecutionObserver,
) -> Result<Vec<ComparisonResult>, ComputeError> {
    let results = execute_comparison(kernel, batch, observer);
    analyze_comparison_results(&results)?;
    Ok(results)
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[ComparisonResult]) -> Result<(), ComputeError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = valid.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.as_ref().err().cloned())
            .unwrap_or(ComputeError::Mismatch));
    };

    if valid.any(|other| other != first) {
        return Err(ComputeError::Mismatch);
    }
    Ok(())
}
