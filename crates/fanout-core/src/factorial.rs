//! Factorial kernels.
//!
//! `Factorial` works in 64-bit two's-complement arithmetic and wraps on
//! overflow. `BigFactorial` is exact for any input. Both map negative
//! input to 0.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::{FACTORIAL_TABLE, FACTORIAL_WRAP_ZERO, MAX_FACTORIAL_I64};
use crate::kernel::Kernel;

/// Fixed-width factorial.
#[derive(Debug, Clone, Copy, Default)]
pub struct Factorial;

impl Factorial {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for Factorial {
    type Output = i64;

    fn name(&self) -> &'static str {
        "Factorial"
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn compute(&self, n: i64) -> i64 {
        if n < 0 {
            return 0;
        }
        if n <= MAX_FACTORIAL_I64 {
            return FACTORIAL_TABLE[n as usize];
        }
        if n >= FACTORIAL_WRAP_ZERO {
            return 0;
        }
        (MAX_FACTORIAL_I64 + 1..=n).fold(FACTORIAL_TABLE[20], i64::wrapping_mul)
    }
}

/// Arbitrary-precision factorial.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigFactorial;

impl BigFactorial {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for BigFactorial {
    type Output = BigUint;

    fn name(&self) -> &'static str {
        "BigFactorial"
    }

    #[allow(clippy::cast_sign_loss)]
    fn compute(&self, n: i64) -> BigUint {
        if n < 0 {
            return BigUint::zero();
        }
        let mut result = BigUint::one();
        for i in 2..=n as u64 {
            result *= i;
        }
        result
    }
}
