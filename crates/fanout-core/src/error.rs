//! Error type shared by the executors and the layers above them.

/// Error type for batch execution and operation lookup.
///
/// Kernel domain edges (negative factorial input, n < 2 for primality) are
/// never errors; they produce defined sentinel results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputeError {
    /// No operation is registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// An element would need a larger task stack than any task may have.
    #[error("input {input} at index {index} recurses deeper than a task stack allows")]
    TooDeep {
        /// Batch index of the rejected element.
        index: usize,
        /// The rejected input.
        input: i64,
    },

    /// The OS refused to start the thread for one batch element.
    #[error("failed to spawn task for index {index}: {reason}")]
    Spawn {
        /// Batch index whose task could not be launched.
        index: usize,
        /// Underlying I/O error message.
        reason: String,
    },

    /// A concurrent task unwound before writing its slot.
    #[error("a concurrent task panicked")]
    TaskPanicked,

    /// Sequential and concurrent results differ.
    #[error("result mismatch between strategies")]
    Mismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_error_display() {
        let err = ComputeError::UnknownOperation("linear_sqrt".into());
        assert_eq!(err.to_string(), "unknown operation: linear_sqrt");

        let err = ComputeError::Spawn {
            index: 7,
            reason: "Resource temporarily unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to spawn task for index 7: Resource temporarily unavailable"
        );

        assert_eq!(
            ComputeError::TooDeep {
                index: 1,
                input: 100_000
            }
            .to_string(),
            "input 100000 at index 1 recurses deeper than a task stack allows"
        );

        assert_eq!(
            ComputeError::Mismatch.to_string(),
            "result mismatch between strategies"
        );
    }
}
