//! Naive Fibonacci kernel.
//!
//! Deliberately exponential: the doubly-recursive definition with no
//! memoization is the load generator that makes the gap between the
//! sequential and concurrent executors visible.
//!
//! Recursion depth equals `n`, so the kernel reports its stack need and the
//! executors size task stacks from it (or reject the input).

use crate::constants::FIB_FRAME_BYTES;
use crate::kernel::Kernel;

/// Doubly-recursive Fibonacci, 0-indexed (F(0) = 0, F(1) = 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl Fibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn fib(n: i64) -> i64 {
    match n {
        i64::MIN..=0 => 0,
        1 => 1,
        _ => fib(n - 1).wrapping_add(fib(n - 2)),
    }
}

impl Kernel for Fibonacci {
    type Output = i64;

    fn name(&self) -> &'static str {
        "Fibonacci"
    }

    fn compute(&self, n: i64) -> i64 {
        fib(n)
    }

    fn stack_bytes(&self, n: i64) -> usize {
        usize::try_from(n.max(0))
            .unwrap_or(usize::MAX)
            .saturating_mul(FIB_FRAME_BYTES)
    }
}
