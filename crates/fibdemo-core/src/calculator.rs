//! The `FibMethod` trait and the error type shared across the workspace.
//!
//! `FibMethod` is the trait consumed by orchestration. Each implementation
//! computes F(n) one way and reports what it can about the work it did.

use serde::Serialize;

/// Error type for Fibonacci demonstrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index was negative; the naive recursion would never reach a base case.
    #[error("negative index {0}: the sequence is only computed for n >= 0")]
    NegativeIndex(i64),

    /// The index does not fit in the index type.
    #[error("index {0} is out of range")]
    IndexOutOfRange(String),

    /// No method is registered under this name.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

/// Outcome of evaluating a single method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The computed (possibly approximate) value of F(n).
    pub value: u64,
    /// Number of function invocations, for methods that count them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls: Option<u64>,
}

impl Evaluation {
    /// An evaluation that did not count calls.
    #[must_use]
    pub fn value(value: u64) -> Self {
        Self { value, calls: None }
    }

    /// An evaluation that counted `calls` invocations.
    #[must_use]
    pub fn counted(value: u64, calls: u64) -> Self {
        Self {
            value,
            calls: Some(calls),
        }
    }
}

/// A way of computing F(n).
pub trait FibMethod: Send + Sync {
    /// Compute F(n).
    fn evaluate(&self, n: u32) -> Evaluation;

    /// Short registry name, e.g. `"golden"`.
    fn name(&self) -> &str;

    /// Heading printed above this method's report.
    fn heading(&self) -> &str;

    /// Whether the value is exact for every index the method accepts.
    fn is_exact(&self) -> bool;
}
