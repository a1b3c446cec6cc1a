//! Trial-division primality kernel.

use crate::kernel::Kernel;

/// Primality by trial division over [2, floor(sqrt(n))].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimalityCheck;

impl PrimalityCheck {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for PrimalityCheck {
    type Output = bool;

    fn name(&self) -> &'static str {
        "PrimalityCheck"
    }

    fn compute(&self, n: i64) -> bool {
        if n < 2 {
            return false;
        }
        // d <= n / d is d * d <= n without the overflow near i64::MAX
        let mut d = 2;
        while d <= n / d {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }
}
