//! Error handling and exit codes.

use std::num::ParseIntError;

use fanout_core::constants::exit_codes;
use fanout_core::error::ComputeError;

/// Map a compute error to its exit code.
pub fn handle_error(err: &ComputeError) -> i32 {
    match err {
        ComputeError::UnknownOperation(_) | ComputeError::TooDeep { .. } => {
            exit_codes::ERROR_CONFIG
        }
        ComputeError::Spawn { .. } | ComputeError::TaskPanicked => exit_codes::ERROR_EXECUTION,
        ComputeError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error bubbling out of [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(compute) = err.downcast_ref::<ComputeError>() {
        handle_error(compute)
    } else if err.downcast_ref::<ParseIntError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
