//! Constants for kernels, the HTTP service, and process exit codes.

/// Default bind address for the HTTP service.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port for the HTTP service.
pub const DEFAULT_PORT: u16 = 8080;

/// Largest n whose factorial fits in an `i64`.
/// 20! = 2432902008176640000
pub const MAX_FACTORIAL_I64: i64 = 20;

/// Smallest n whose wrapped 64-bit factorial is zero.
///
/// 66! carries 64 factors of two, so every product from here on is a
/// multiple of 2^64 and wraps to 0.
pub const FACTORIAL_WRAP_ZERO: i64 = 66;

/// Stack reserved per recursion level of the Fibonacci kernel.
///
/// Unoptimized builds use well under this per frame.
pub const FIB_FRAME_BYTES: usize = 256;

/// Stack a task gets when its kernel needs no more than the default.
pub const DEFAULT_TASK_STACK: usize = 2 * 1024 * 1024;

/// Stack need up to which the sequential executor stays on the calling
/// thread.
pub const INLINE_STACK_NEED: usize = 64 * 1024;

/// Largest stack any single task may reserve. Inputs that need more are
/// rejected before the batch starts.
pub const MAX_TASK_STACK: usize = 16 * 1024 * 1024;

/// Precomputed factorials for n = 0..=20 (fast path).
pub const FACTORIAL_TABLE: [i64; 21] = {
    let mut table = [1i64; 21];
    let mut i = 2;
    while i < 21 {
        table[i] = table[i - 1] * i as i64;
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Sequential and concurrent results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration (unknown operation, bad number list).
    pub const ERROR_CONFIG: i32 = 4;
    /// A concurrent task could not be spawned or panicked.
    pub const ERROR_EXECUTION: i32 = 5;
}
