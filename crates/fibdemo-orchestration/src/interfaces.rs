//! Orchestration interfaces.

use std::io;
use std::time::Duration;

use serde::{Serialize, Serializer};

use fibdemo_core::calculator::Evaluation;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the result of one method.
    fn present_result(&mut self, result: &CalculationResult) -> io::Result<()>;

    /// Present the comparison once every method has run.
    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()>;

    /// Flush anything the presenter buffered.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Result of a single timed method run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Registry name of the method.
    pub method: String,
    /// Heading shown above the report block.
    #[serde(skip)]
    pub heading: String,
    /// The index that was computed.
    pub n: u32,
    /// Whether the method is exact for every index.
    pub exact: bool,
    /// Value and, where counted, number of calls.
    #[serde(flatten)]
    pub evaluation: Evaluation,
    /// Monotonic time spent in the method.
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
}

impl CalculationResult {
    /// Elapsed time in whole nanoseconds.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

fn serialize_nanos<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u128(elapsed.as_nanos())
}

/// Outcome of comparing the approximate result with the exact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    /// Every method produced the same value.
    Agree { value: u64 },
    /// The approximation drifted from the exact value.
    Diverge {
        approximate: u64,
        exact: u64,
        difference: u64,
    },
    /// Fewer than one exact and one approximate result; nothing to compare.
    Incomplete,
}
