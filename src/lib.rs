//! Workspace-level integration tests for fibdemo.
//!
//! The tests live in `tests/`; this target only anchors the package.
