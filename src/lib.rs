//! Workspace-level integration tests for fanout. See `tests/`.
