//! Self-test harness.
//!
//! Each [`Check`] asserts a handful of fixed values. Checks run in order and
//! the run stops at the first failure.

use std::f64::consts::PI;

use serde::Serialize;

use ypp_math::{
    approx_eq, calculate_area, calculate_circle_area, fibonacci_recursive, AREA_TOLERANCE,
};

/// A named group of assertions.
pub struct Check {
    /// Display name, e.g. "Area calculation".
    pub name: &'static str,
    run: fn() -> Result<(), String>,
}

impl Check {
    #[must_use]
    pub fn new(name: &'static str, run: fn() -> Result<(), String>) -> Self {
        Self { name, run }
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The first failing check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{name} test failed: {detail}")]
pub struct CheckFailure {
    pub name: String,
    pub detail: String,
}

/// The checks run by `ypp-demo test`.
#[must_use]
pub fn default_checks() -> Vec<Check> {
    vec![
        Check::new("Area calculation", check_area),
        Check::new("Circle area", check_circle_area),
        Check::new("Fibonacci", check_fibonacci),
    ]
}

/// Run `checks` in order, reporting each outcome to `report`.
///
/// Stops at the first failure; the failing outcome is still reported.
pub fn run_checks(
    checks: &[Check],
    mut report: impl FnMut(&CheckOutcome),
) -> Result<Vec<CheckOutcome>, CheckFailure> {
    let mut outcomes = Vec::with_capacity(checks.len());
    for check in checks {
        tracing::debug!(check = check.name, "running check");
        let result = (check.run)();
        let outcome = CheckOutcome {
            name: check.name.to_string(),
            passed: result.is_ok(),
            detail: result.as_ref().err().cloned(),
        };
        report(&outcome);
        if let Err(detail) = result {
            return Err(CheckFailure {
                name: outcome.name,
                detail,
            });
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn check_area() -> Result<(), String> {
    expect_close("calculate_area(10.0, 5.0)", calculate_area(10.0, 5.0), 50.0)
}

fn check_circle_area() -> Result<(), String> {
    expect_close(
        "calculate_circle_area(2.0)",
        calculate_circle_area(2.0),
        PI * 4.0,
    )
}

fn check_fibonacci() -> Result<(), String> {
    for (n, expected) in [(0, 0), (1, 1), (5, 5), (10, 55)] {
        let got = fibonacci_recursive(n);
        if got != expected {
            return Err(format!("fibonacci({n}) = {got}, expected {expected}"));
        }
    }
    Ok(())
}

fn expect_close(what: &str, got: f64, expected: f64) -> Result<(), String> {
    if approx_eq(got, expected, AREA_TOLERANCE) {
        Ok(())
    } else {
        Err(format!("{what} = {got}, expected {expected}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checks_pass() {
        let mut seen = Vec::new();
        let outcomes = run_checks(&default_checks(), |o| seen.push(o.name.clone())).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.passed));
        assert_eq!(seen, ["Area calculation", "Circle area", "Fibonacci"]);
    }

    #[test]
    fn stops_at_first_failure() {
        let checks = vec![
            Check::new("first", || Ok(())),
            Check::new("broken", || Err("boom".into())),
            Check::new("never", || panic!("must not run")),
        ];
        let mut reported = Vec::new();
        let err = run_checks(&checks, |o| reported.push(o.clone())).unwrap_err();
        assert_eq!(
            err,
            CheckFailure {
                name: "broken".into(),
                detail: "boom".into(),
            }
        );
        assert_eq!(reported.len(), 2);
        assert!(!reported[1].passed);
        assert_eq!(err.to_string(), "broken test failed: boom");
    }

    #[test]
    fn expect_close_reports_values() {
        assert!(expect_close("x", 1.0, 1.0005).is_ok());
        let err = expect_close("x", 1.0, 2.0).unwrap_err();
        assert_eq!(err, "x = 1, expected 2");
    }

    #[test]
    fn outcome_serializes_without_empty_detail() {
        let outcome = CheckOutcome {
            name: "Fibonacci".into(),
            passed: true,
            detail: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"name":"Fibonacci","passed":true}"#);
    }
}
