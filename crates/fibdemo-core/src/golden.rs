//! Closed-form Fibonacci via Binet's formula.
//!
//! F(n) = (phi^n - (-1/phi)^n) / sqrt 5, evaluated in `f64` and truncated
//! toward zero. The cost is a handful of floating-point operations whatever
//! the index, which is the point of the comparison with the naive recursion.
//! The price is precision: see [`GOLDEN_EXACT_LIMIT`].

use crate::calculator::{Evaluation, FibMethod};
use crate::constants::{GOLDEN_EXACT_LIMIT, PHI};

/// Compute an approximation of F(n) in constant time.
///
/// No correction is applied to the floating-point result. Beyond
/// [`GOLDEN_EXACT_LIMIT`] the value drifts away from F(n), and once
/// `phi^n` leaves the `u64` range the cast saturates at `u64::MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fib_golden(n: u32) -> u64 {
    let sqrt5 = 5.0_f64.sqrt();
    let exponent = f64::from(n);

    let approx = (PHI.powf(exponent) - (-1.0 / PHI).powf(exponent)) / sqrt5;
    approx as u64
}

/// Whether [`fib_golden`] is known to return the exact value for `n`.
#[must_use]
pub fn is_exact_for(n: u32) -> bool {
    n <= GOLDEN_EXACT_LIMIT
}

/// Golden-ratio method.
pub struct GoldenRatio;

impl GoldenRatio {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoldenRatio {
    fn default() -> Self {
        Self::new()
    }
}

impl FibMethod for GoldenRatio {
    fn evaluate(&self, n: u32) -> Evaluation {
        Evaluation::value(fib_golden(n))
    }

    fn name(&self) -> &'static str {
        "golden"
    }

    fn heading(&self) -> &'static str {
        "GOLDEN RATIO METHOD"
    }

    fn is_exact(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn base_cases() {
        assert_eq!(fib_golden(0), 0);
        assert_eq!(fib_golden(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fib_golden(2), 1);
        assert_eq!(fib_golden(5), 5);
        assert_eq!(fib_golden(10), 55);
        assert_eq!(fib_golden(20), 6765);
        assert_eq!(fib_golden(30), 832_040);
    }

    #[test]
    fn exact_up_to_limit() {
        for n in 0..=GOLDEN_EXACT_LIMIT {
            assert_eq!(fib_golden(n), FIB_TABLE[n as usize], "F({n})");
        }
    }

    #[test]
    fn diverges_past_limit() {
        let diverging = (GOLDEN_EXACT_LIMIT + 1..=93)
            .filter(|&n| fib_golden(n) != FIB_TABLE[n as usize])
            .count();
        assert!(diverging > 0);
    }

    #[test]
    fn phi_constant_is_the_closed_form_root() {
        let computed = (1.0 + 5.0_f64.sqrt()) / 2.0;
        assert_eq!(PHI.to_bits(), computed.to_bits());
    }

    #[test]
    fn saturates_for_huge_index() {
        assert_eq!(fib_golden(10_000), u64::MAX);
    }

    #[test]
    fn exactness_boundary() {
        assert!(is_exact_for(0));
        assert!(is_exact_for(GOLDEN_EXACT_LIMIT));
        assert!(!is_exact_for(GOLDEN_EXACT_LIMIT + 1));
    }

    #[test]
    fn method_metadata() {
        let method = GoldenRatio::default();
        assert_eq!(method.name(), "golden");
        assert_eq!(method.heading(), "GOLDEN RATIO METHOD");
        assert!(!method.is_exact());
        assert_eq!(method.evaluate(10), Evaluation::value(55));
    }
}
