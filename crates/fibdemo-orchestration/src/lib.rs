//! # fibdemo-orchestration
//!
//! Timed execution of the selected methods, method selection, and
//! comparison of the approximate and exact results.

pub mod interfaces;
pub mod method_selection;
pub mod orchestrator;

pub use interfaces::{CalculationResult, Comparison, ResultPresenter};
pub use method_selection::get_methods_to_run;
pub use orchestrator::{analyze_comparison_results, execute_methods};
