//! # fanout-orchestration
//!
//! Operation selection, batch execution, and strategy cross-validation.

pub mod interfaces;
pub mod operation_selection;
pub mod orchestrator;

pub use interfaces::{BatchOutcome, BatchRequest, BatchResponse, ResultPresenter, Results};
pub use orchestrator::{
    analyze_comparison_results, compare_strategies, execute_comparison, execute_operation,
};
