//! Operation selection logic.

use fanout_core::error::ComputeError;
use fanout_core::operation::Operation;

/// Get operations to run based on a name, or every operation for `"all"`.
pub fn get_operations_to_run(name: &str) -> Result<Vec<Operation>, ComputeError> {
    match name.trim() {
        "all" => Ok(Operation::ALL.to_vec()),
        name => Ok(vec![name.parse()?]),
    }
}

/// Names of every available operation.
#[must_use]
pub fn available_operations() -> Vec<&'static str> {
    Operation::ALL.iter().map(|op| op.name()).collect()
}
