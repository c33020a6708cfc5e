//! Workspace-level integration tests for fibnum live in `tests/`.
//! This library target is intentionally empty.
