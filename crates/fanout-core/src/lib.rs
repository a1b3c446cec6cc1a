//! # fanout-core
//!
//! Computation kernels (factorial, Fibonacci, primality) and the two
//! strategies that apply a kernel across a batch: a sequential baseline and
//! a fan-out executor that runs one task per element and joins them on a
//! wait-group while keeping results in input order.

pub mod concurrent;
pub mod constants;
pub mod error;
pub mod executor;
pub mod factorial;
pub mod fibonacci;
pub mod kernel;
pub mod observer;
pub mod observers;
pub mod operation;
pub mod primality;
pub mod sequential;

// Re-exports
pub use concurrent::ConcurrentExecutor;
pub use constants::{exit_codes, DEFAULT_HOST, DEFAULT_PORT};
pub use error::ComputeError;
pub use executor::{ExecutionReport, Executor, Strategy};
pub use factorial::{BigFactorial, Factorial};
pub use fibonacci::Fibonacci;
pub use kernel::{Kernel, KernelKind};
pub use observer::{BatchSummary, ExecutionObserver, TaskUpdate};
pub use operation::Operation;
pub use primality::PrimalityCheck;
pub use sequential::SequentialExecutor;
