//! The six externally addressable operations.
//!
//! Each operation pairs one kernel with one strategy. The sequential
//! factorial operation uses the arbitrary-precision kernel; the other five
//! use the fixed-width kernels.

use std::fmt;
use std::str::FromStr;

use crate::error::ComputeError;
use crate::executor::Strategy;
use crate::kernel::KernelKind;

/// A (kernel, strategy) pair reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LinearFactorial,
    LinearFib,
    LinearPrimeChecker,
    ConcurrentFactorial,
    ConcurrentFib,
    ConcurrentPrimeChecker,
}

impl Operation {
    /// Every operation, sequential ones first.
    pub const ALL: [Operation; 6] = [
        Operation::LinearFactorial,
        Operation::LinearFib,
        Operation::LinearPrimeChecker,
        Operation::ConcurrentFactorial,
        Operation::ConcurrentFib,
        Operation::ConcurrentPrimeChecker,
    ];

    /// Operation name, also the HTTP route segment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearFactorial => "linear_factorial",
            Self::LinearFib => "linear_fib",
            Self::LinearPrimeChecker => "linear_primechecker",
            Self::ConcurrentFactorial => "concurrent_factorial",
            Self::ConcurrentFib => "concurrent_fib",
            Self::ConcurrentPrimeChecker => "concurrent_primechecker",
        }
    }

    /// Kernel applied by this operation.
    #[must_use]
    pub fn kernel(self) -> KernelKind {
        match self {
            Self::LinearFactorial => KernelKind::BigFactorial,
            Self::ConcurrentFactorial => KernelKind::Factorial,
            Self::LinearFib | Self::ConcurrentFib => KernelKind::Fibonacci,
            Self::LinearPrimeChecker | Self::ConcurrentPrimeChecker => KernelKind::PrimalityCheck,
        }
    }

    /// Strategy used by this operation.
    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Self::LinearFactorial | Self::LinearFib | Self::LinearPrimeChecker => {
                Strategy::Sequential
            }
            Self::ConcurrentFactorial | Self::ConcurrentFib | Self::ConcurrentPrimeChecker => {
                Strategy::Concurrent
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ComputeError::UnknownOperation(name.to_string()))
    }
}
