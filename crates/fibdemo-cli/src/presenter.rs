//! Result presenters: the classic text report and a JSON document.

use std::io::{self, Write};

use serde::Serialize;

use fibdemo_core::constants::GOLDEN_EXACT_LIMIT;
use fibdemo_core::golden::is_exact_for;
use fibdemo_core::recursive::predicted_calls;
use fibdemo_orchestration::interfaces::{CalculationResult, Comparison, ResultPresenter};

use crate::output::{format_duration, format_number, ordinal};
use crate::ui;

/// Text report, one block per method.
pub struct ReportPresenter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> ReportPresenter<W> {
    #[must_use]
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Consume the presenter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for ReportPresenter<W> {
    fn present_result(&mut self, result: &CalculationResult) -> io::Result<()> {
        let value = result.evaluation.value;
        let nth = ordinal(result.n);

        writeln!(self.out)?;
        writeln!(self.out, "{}", ui::heading(&result.heading))?;

        match result.evaluation.calls {
            None => {
                writeln!(self.out, "{value} is the {nth} number in the fibonacci sequence")?;
                writeln!(self.out, "elapsed time = {} nanoseconds", result.elapsed_nanos())?;
                if self.verbose && !result.exact && !is_exact_for(result.n) {
                    writeln!(
                        self.out,
                        "(beyond F({GOLDEN_EXACT_LIMIT}) this method is only an approximation)"
                    )?;
                }
            }
            Some(calls) => {
                writeln!(self.out, "{value} is the {nth} number in the fibonacci sequence,")?;
                writeln!(self.out, "elapsed time = {} nanoseconds", result.elapsed_nanos())?;
                writeln!(self.out, "Made {calls} recursive function calls")?;
                if self.verbose {
                    if let Some(predicted) = predicted_calls(result.n) {
                        writeln!(
                            self.out,
                            "(2*F(n+1)-1 = {} calls predicted, {} elapsed)",
                            format_number(predicted),
                            format_duration(result.elapsed)
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        match *comparison {
            Comparison::Diverge {
                approximate,
                exact,
                difference,
            } => ui::print_warning(&format!(
                "golden ratio approximation {approximate} differs from exact value {exact} by {difference}"
            )),
            Comparison::Agree { value } if self.verbose => {
                writeln!(self.out)?;
                writeln!(self.out, "Both methods agree on {value}")?;
            }
            Comparison::Agree { .. } | Comparison::Incomplete => {}
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [CalculationResult],
    comparison: Option<Comparison>,
}

/// Collects results and writes them as one JSON document on `finish`.
pub struct JsonPresenter<W: Write> {
    out: W,
    results: Vec<CalculationResult>,
    comparison: Option<Comparison>,
}

impl<W: Write> JsonPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            results: Vec::new(),
            comparison: None,
        }
    }

    /// Consume the presenter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    fn present_result(&mut self, result: &CalculationResult) -> io::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        self.comparison = Some(*comparison);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let report = JsonReport {
            results: &self.results,
            comparison: self.comparison,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use fibdemo_core::calculator::Evaluation;

    fn golden(n: u32, value: u64) -> CalculationResult {
        CalculationResult {
            method: "golden".into(),
            heading: "GOLDEN RATIO METHOD".into(),
            n,
            exact: false,
            evaluation: Evaluation::value(value),
            elapsed: Duration::from_nanos(412),
        }
    }

    fn recursive(n: u32, value: u64, calls: u64) -> CalculationResult {
        CalculationResult {
            method: "recursive".into(),
            heading: "RECURSIVE METHOD".into(),
            n,
            exact: true,
            evaluation: Evaluation::counted(value, calls),
            elapsed: Duration::from_nanos(1_834),
        }
    }

    fn render(verbose: bool, results: &[CalculationResult], comparison: Comparison) -> String {
        let mut presenter = ReportPresenter::new(Vec::new(), verbose);
        for result in results {
            presenter.present_result(result).unwrap();
        }
        presenter.present_comparison(&comparison).unwrap();
        presenter.finish().unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn report_golden_block() {
        let text = render(false, &[golden(10, 55)], Comparison::Incomplete);
        assert!(text.contains("**GOLDEN RATIO METHOD**"));
        assert!(text.contains("55 is the 10th number in the fibonacci sequence\n"));
        assert!(text.contains("elapsed time = 412 nanoseconds"));
        assert!(!text.contains("recursive function calls"));
    }

    #[test]
    fn report_recursive_block() {
        let text = render(false, &[recursive(10, 55, 177)], Comparison::Incomplete);
        assert!(text.contains("**RECURSIVE METHOD**"));
        assert!(text.contains("55 is the 10th number in the fibonacci sequence,\n"));
        assert!(text.contains("elapsed time = 1834 nanoseconds"));
        assert!(text.contains("Made 177 recursive function calls"));
        assert!(!text.contains("predicted"));
    }

    #[test]
    fn report_blocks_in_order() {
        let text = render(
            false,
            &[golden(10, 55), recursive(10, 55, 177)],
            Comparison::Agree { value: 55 },
        );
        let golden_at = text.find("GOLDEN RATIO METHOD").unwrap();
        let recursive_at = text.find("RECURSIVE METHOD").unwrap();
        assert!(golden_at < recursive_at);
        assert!(!text.contains("agree"));
    }

    #[test]
    fn report_verbose_extras() {
        let text = render(
            true,
            &[golden(10, 55), recursive(10, 55, 177)],
            Comparison::Agree { value: 55 },
        );
        assert!(text.contains("(2*F(n+1)-1 = 177 calls predicted"));
        assert!(text.contains("Both methods agree on 55"));
    }

    #[test]
    fn report_verbose_approximation_note() {
        let text = render(true, &[golden(80, 1)], Comparison::Incomplete);
        assert!(text.contains("beyond F(70)"));

        let text = render(true, &[golden(GOLDEN_EXACT_LIMIT, 1)], Comparison::Incomplete);
        assert!(!text.contains("beyond F(70)"));

        let text = render(true, &[golden(GOLDEN_EXACT_LIMIT + 1, 1)], Comparison::Incomplete);
        assert!(text.contains("beyond F(70)"));

        let text = render(false, &[golden(80, 1)], Comparison::Incomplete);
        assert!(!text.contains("beyond"));
    }

    #[test]
    fn report_divergence_goes_to_stderr() {
        let text = render(
            false,
            &[golden(72, 498_454_011_879_265)],
            Comparison::Diverge {
                approximate: 498_454_011_879_265,
                exact: 498_454_011_879_264,
                difference: 1,
            },
        );
        assert!(!text.contains("differs"));
    }

    #[test]
    fn json_document() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present_result(&golden(10, 55)).unwrap();
        presenter.present_result(&recursive(10, 55, 177)).unwrap();
        presenter
            .present_comparison(&Comparison::Agree { value: 55 })
            .unwrap();
        presenter.finish().unwrap();

        let json: serde_json::Value = serde_json::from_slice(&presenter.into_inner()).unwrap();
        assert_eq!(json["results"][0]["method"], "golden");
        assert!(json["results"][0].get("calls").is_none());
        assert_eq!(json["results"][1]["calls"], 177);
        assert_eq!(json["results"][1]["elapsed_ns"], 1_834);
        assert_eq!(json["comparison"]["status"], "agree");
    }
}
