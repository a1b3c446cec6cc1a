//! CLI result presenter.

use fanout_core::observer::TaskUpdate;
use fanout_orchestration::interfaces::{BatchOutcome, ComparisonResult, ResultPresenter};

use crate::output::{format_duration, format_speedup, format_value};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_outcome(&self, outcome: &BatchOutcome, batch: &[i64]) {
        if self.quiet {
            let line = serde_json::to_string(&outcome.results).unwrap_or_default();
            println!("{line}");
            return;
        }

        println!("Operation: {}", outcome.operation);
        println!("Batch size: {}", batch.len());
        println!("Duration: {}", format_duration(outcome.duration));
        for (input, value) in batch.iter().zip(outcome.results.to_strings()) {
            println!("  {input:>12} -> {}", format_value(&value, self.verbose));
        }
    }

    fn present_completion_order(&self, updates: &[TaskUpdate]) {
        if self.quiet {
            return;
        }

        println!("\nCompletion order:");
        println!("{:-<72}", "");
        for (rank, update) in updates.iter().enumerate() {
            println!(
                "  #{:<4} index {:<6} value {:<12} -> {:<24} {:>10}",
                rank + 1,
                update.index,
                update.input,
                format_value(&update.result, self.verbose),
                format_duration(update.elapsed),
            );
        }
    }

    fn present_comparison(&self, results: &[ComparisonResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        let baseline = results.first().map(|r| r.duration);
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            let speedup = baseline
                .map(|b| format_speedup(b, result.duration))
                .unwrap_or_default();
            println!(
                "  {:<12} {:>10} {:>8} [{}]",
                result.strategy.name(),
                format_duration(result.duration),
                speedup,
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
