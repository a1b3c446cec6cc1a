//! The `Kernel` trait and the catalog of available kernels.
//!
//! A kernel is a pure function from one integer to one result. Executors
//! apply a kernel to every element of a batch, so kernels must be callable
//! from any number of threads at once and must not share mutable state.

use std::fmt;

/// A pure, stateless computation over a single batch element.
pub trait Kernel: Send + Sync {
    /// Result type produced for one input.
    type Output: Send + Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Human-readable kernel name.
    fn name(&self) -> &'static str;

    /// Compute the result for `n`. Total over all of `i64`.
    fn compute(&self, n: i64) -> Self::Output;

    /// Stack bytes needed to compute `n`, for kernels whose stack use grows
    /// with the input. Zero means the default thread stack is enough.
    fn stack_bytes(&self, _n: i64) -> usize {
        0
    }
}

/// Identifies one of the available kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    /// Fixed-width factorial (`i64`, wrapping).
    Factorial,
    /// Arbitrary-precision factorial.
    BigFactorial,
    /// Naive doubly-recursive Fibonacci (`i64`, wrapping).
    Fibonacci,
    /// Trial-division primality check.
    PrimalityCheck,
}

impl KernelKind {
    /// All kernels, in catalog order.
    pub const ALL: [KernelKind; 4] = [
        KernelKind::Factorial,
        KernelKind::BigFactorial,
        KernelKind::Fibonacci,
        KernelKind::PrimalityCheck,
    ];

    /// Kernel name as used in operation names and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::BigFactorial => "bigfactorial",
            Self::Fibonacci => "fib",
            Self::PrimalityCheck => "primechecker",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
