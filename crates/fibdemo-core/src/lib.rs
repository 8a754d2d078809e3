//! # fibdemo-core
//!
//! Two ways of computing a Fibonacci number, side by side: Binet's
//! closed-form formula in constant time, and the naive double recursion with
//! an invocation counter that makes its exponential cost visible.

pub mod calculator;
pub mod constants;
pub mod golden;
pub mod input;
pub mod recursive;
pub mod registry;

// Re-exports
pub use calculator::{Evaluation, FibError, FibMethod};
pub use constants::{exit_codes, FIB_TABLE, GOLDEN_EXACT_LIMIT, MAX_FIB_U64, PHI};
pub use golden::{fib_golden, GoldenRatio};
pub use input::parse_index;
pub use recursive::{fib_recursive, predicted_calls, CallCounter, NaiveRecursion};
pub use registry::{DefaultFactory, MethodFactory};

/// Compute F(n) exactly, returning the value and the number of recursive
/// calls it took.
///
/// # Example
/// ```
/// assert_eq!(fibdemo_core::fibonacci_counted(10), (55, 177));
/// assert_eq!(fibdemo_core::fibonacci_counted(0), (0, 1));
/// ```
#[must_use]
pub fn fibonacci_counted(n: u32) -> (u64, u64) {
    let mut counter = CallCounter::new();
    let value = fib_recursive(n, &mut counter);
    (value, counter.get())
}
