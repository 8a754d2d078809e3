//! Naive double recursion with an invocation counter.
//!
//! The recursion is deliberately left as the textbook definition: no
//! memoisation, no iteration limit, no tail calls. Its call count grows as
//! O(phi^n) and that growth is what the demonstration shows.

use crate::calculator::{Evaluation, FibMethod};
use crate::constants::FIB_TABLE;

/// Counts invocations of [`fib_recursive`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounter(u64);

impl CallCounter {
    #[must_use]
    pub fn new() -> Self {
        Self(0)
    }

    /// Record one invocation.
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    /// Number of invocations recorded so far.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Compute F(n) exactly by naive double recursion.
///
/// `counter` is incremented once per invocation, including the outermost
/// one, before any other work.
pub fn fib_recursive(n: u32, counter: &mut CallCounter) -> u64 {
    counter.tick();
    match n {
        0 | 1 => u64::from(n),
        _ => fib_recursive(n - 1, counter) + fib_recursive(n - 2, counter),
    }
}

/// Number of invocations [`fib_recursive`] makes for `n`, without running it.
///
/// count(n) = count(n-1) + count(n-2) + 1 with count(0) = count(1) = 1,
/// which solves to 2 * F(n+1) - 1. Returns `None` once that no longer fits
/// in a `u64`.
#[must_use]
pub fn predicted_calls(n: u32) -> Option<u64> {
    let next = FIB_TABLE.get(n as usize + 1)?;
    next.checked_mul(2).map(|twice| twice - 1)
}

/// Naive recursive method.
pub struct NaiveRecursion;

impl NaiveRecursion {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveRecursion {
    fn default() -> Self {
        Self::new()
    }
}

impl FibMethod for NaiveRecursion {
    fn evaluate(&self, n: u32) -> Evaluation {
        let mut counter = CallCounter::new();
        let value = fib_recursive(n, &mut counter);
        Evaluation::counted(value, counter.get())
    }

    fn name(&self) -> &'static str {
        "recursive"
    }

    fn heading(&self) -> &'static str {
        "RECURSIVE METHOD"
    }

    fn is_exact(&self) -> bool {
        true
    }
}
