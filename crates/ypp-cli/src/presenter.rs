//! CLI result presenter.

use serde::Serialize;

use ypp_math::{CalculationResult, Shape};

use crate::output::{format_area, format_duration, format_number};
use crate::selftest::CheckOutcome;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a computed area.
    fn present_area(&self, shape: &Shape, area: f64);

    /// Present a Fibonacci calculation result.
    fn present_fibonacci(&self, result: &CalculationResult);

    /// Present a comparison of several calculators.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

#[derive(Serialize)]
struct AreaReport<'a> {
    #[serde(flatten)]
    shape: &'a Shape,
    area: f64,
}

#[derive(Serialize)]
struct FibonacciReport<'a> {
    algorithm: &'a str,
    n: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    duration_ns: u128,
}

impl<'a> From<&'a CalculationResult> for FibonacciReport<'a> {
    fn from(result: &'a CalculationResult) -> Self {
        Self {
            algorithm: &result.algorithm,
            n: result.n,
            value: result.outcome.as_ref().ok().copied(),
            error: result.outcome.as_ref().err().map(ToString::to_string),
            duration_ns: result.duration.as_nanos(),
        }
    }
}

/// JSON for an area result.
#[must_use]
pub fn area_json(shape: &Shape, area: f64) -> String {
    serde_json::to_string(&AreaReport { shape, area }).unwrap_or_default()
}

/// JSON for a list of Fibonacci results.
#[must_use]
pub fn fibonacci_json(results: &[CalculationResult]) -> String {
    let reports: Vec<FibonacciReport<'_>> = results.iter().map(FibonacciReport::from).collect();
    serde_json::to_string(&reports).unwrap_or_default()
}

/// JSON for self-test outcomes.
#[must_use]
pub fn checks_json(outcomes: &[CheckOutcome]) -> String {
    serde_json::to_string(outcomes).unwrap_or_default()
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_area(&self, shape: &Shape, area: f64) {
        if self.json {
            println!("{}", area_json(shape, area));
            return;
        }
        if self.quiet {
            println!("{}", format_area(area));
            return;
        }
        let label = match shape {
            Shape::Rectangle { .. } => "Area calculation result",
            Shape::Circle { .. } => "Circle area calculation result",
        };
        println!("{label}: {}", format_area(area));
    }

    fn present_fibonacci(&self, result: &CalculationResult) {
        if self.json {
            println!("{}", fibonacci_json(std::slice::from_ref(result)));
            return;
        }
        let value = match &result.outcome {
            Ok(value) => *value,
            Err(e) => {
                self.present_error(&format!("{}: {e}", result.algorithm));
                return;
            }
        };
        if self.quiet {
            println!("{value}");
            return;
        }
        if self.verbose {
            println!("Algorithm: {}", result.algorithm);
            println!("Duration: {}", format_duration(result.duration));
        }
        println!("F({}) = {}", result.n, format_number(value));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet || self.json {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("ERROR: {e}"),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use ypp_math::MathError;

    fn ok_result(algorithm: &str, value: u64) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            n: 10,
            outcome: Ok(value),
            duration: Duration::from_micros(3),
        }
    }

    #[test]
    fn area_json_flattens_shape() {
        let shape = Shape::Rectangle {
            width: 5.0,
            height: 3.0,
        };
        assert_eq!(
            area_json(&shape, 15.0),
            r#"{"shape":"rectangle","width":5.0,"height":3.0,"area":15.0}"#
        );
    }

    #[test]
    fn fibonacci_json_reports_value_and_error() {
        let results = vec![
            ok_result("Iterative", 55),
            CalculationResult {
                algorithm: "Iterative".into(),
                n: 94,
                outcome: Err(MathError::Overflow(94)),
                duration: Duration::from_nanos(10),
            },
        ];
        let json: serde_json::Value = serde_json::from_str(&fibonacci_json(&results)).unwrap();
        assert_eq!(json[0]["value"], 55);
        assert!(json[0].get("error").is_none());
        assert_eq!(
            json[1]["error"],
            "F(94) overflows u64 (maximum index is 93)"
        );
        assert!(json[1].get("value").is_none());
    }

    #[test]
    fn presenter_flags() {
        let presenter = CLIResultPresenter::new(false, true, false);
        assert!(presenter.is_quiet());
        assert!(!presenter.is_json());
    }

    #[test]
    fn presenter_modes_do_not_panic() {
        let circle = Shape::Circle { radius: 2.0 };
        for (verbose, quiet, json) in [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (false, false, true),
        ] {
            let presenter = CLIResultPresenter::new(verbose, quiet, json);
            presenter.present_area(&circle, circle.area());
            presenter.present_fibonacci(&ok_result("Memoized", 55));
            presenter.present_comparison(&[
                ok_result("Iterative", 55),
                CalculationResult {
                    algorithm: "NaiveRecursive".into(),
                    n: 50,
                    outcome: Err(MathError::RecursionLimit { n: 50, limit: 40 }),
                    duration: Duration::ZERO,
                },
            ]);
        }
    }

    #[test]
    fn presenter_present_error() {
        let presenter = CLIResultPresenter::new(false, false, false);
        presenter.present_error("test error message");
    }
}
