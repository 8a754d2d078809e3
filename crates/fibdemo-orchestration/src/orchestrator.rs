//! Core orchestration: timed execution and result analysis.
//!
//! Methods run one after another on the calling thread. Each run is
//! bracketed by its own pair of monotonic clock samples so the reported
//! time covers the computation only.

use std::sync::Arc;
use std::time::Instant;

use fibdemo_core::calculator::FibMethod;

use crate::interfaces::{CalculationResult, Comparison};

/// Run one method and time it.
pub fn execute_method(method: &dyn FibMethod, n: u32) -> CalculationResult {
    let start = Instant::now();
    let evaluation = method.evaluate(n);
    let elapsed = start.elapsed();

    tracing::debug!(
        method = method.name(),
        n,
        value = evaluation.value,
        calls = evaluation.calls,
        elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        "method finished"
    );

    CalculationResult {
        method: method.name().to_string(),
        heading: method.heading().to_string(),
        n,
        exact: method.is_exact(),
        evaluation,
        elapsed,
    }
}

/// Run every method in order, timing each separately.
pub fn execute_methods(methods: &[Arc<dyn FibMethod>], n: u32) -> Vec<CalculationResult> {
    methods
        .iter()
        .map(|method| execute_method(method.as_ref(), n))
        .collect()
}

/// Compare the first approximate result against the first exact one.
///
/// When every result is exact (or every one approximate) the values are
/// compared among themselves instead.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Comparison {
    let exact = results.iter().find(|r| r.exact);
    let approximate = results.iter().find(|r| !r.exact);

    let (reference, candidate) = match (exact, approximate) {
        (Some(e), Some(a)) => (e, a),
        _ if results.len() >= 2 => (&results[0], &results[1]),
        _ => return Comparison::Incomplete,
    };

    let exact = reference.evaluation.value;
    let approximate = candidate.evaluation.value;
    if exact == approximate {
        Comparison::Agree { value: exact }
    } else {
        let difference = exact.abs_diff(approximate);
        tracing::warn!(
            n = reference.n,
            exact,
            approximate,
            difference,
            "golden ratio approximation diverged"
        );
        Comparison::Diverge {
            approximate,
            exact,
            difference,
        }
    }
}
