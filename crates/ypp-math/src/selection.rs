//! Calculator selection, execution and cross-checking.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::calculator::{FibCalculator, MathError};
use crate::registry::CalculatorFactory;

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// Requested index.
    pub n: u64,
    /// The computed value or a structured error.
    pub outcome: Result<u64, MathError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn FibCalculator>>, MathError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

/// Run every calculator on `n`, timing each one.
pub fn execute_calculations(
    calculators: &[Arc<dyn FibCalculator>],
    n: u64,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.compute(n);
            let duration = start.elapsed();
            match &outcome {
                Ok(value) => {
                    tracing::debug!(algorithm = calc.name(), n, value, ?duration, "computed");
                }
                Err(e) => tracing::debug!(algorithm = calc.name(), n, error = %e, "failed"),
            }
            CalculationResult {
                algorithm: calc.name().to_string(),
                n,
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that every successful result agrees with the first one.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<u64, MathError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(&first) = values.next() else {
        return Err(MathError::NoValidResults);
    };

    if values.any(|&v| v != first) {
        let n = results.first().map_or(0, |r| r.n);
        return Err(MathError::Mismatch(n));
    }

    Ok(first)
}
