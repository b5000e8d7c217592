//! Calculator trait and error type.
//!
//! `FibCalculator` is the trait implemented by every Fibonacci algorithm and
//! consumed by the registry and the selection helpers.

/// Error type for area and Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A negative Fibonacci index was requested.
    #[error("fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i64),

    /// F(n) does not fit in a u64.
    #[error("F({0}) overflows u64 (maximum index is 93)")]
    Overflow(u64),

    /// The naive recursive calculator refuses indices above its limit.
    #[error("index {n} exceeds the recursive calculator limit of {limit}")]
    RecursionLimit { n: u64, limit: u64 },

    /// A geometric dimension was negative or not finite.
    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different calculators don't match.
    #[error("result mismatch between calculators at n={0}")]
    Mismatch(u64),

    /// None of the calculators produced a value.
    #[error("no valid results")]
    NoValidResults,
}

/// Trait for Fibonacci calculators.
pub trait FibCalculator: Send + Sync {
    /// Calculate F(n).
    fn compute(&self, n: u64) -> Result<u64, MathError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Convert a signed index into a Fibonacci index, rejecting negatives.
pub fn checked_index(n: i64) -> Result<u64, MathError> {
    u64::try_from(n).map_err(|_| MathError::NegativeIndex(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_index_accepts_non_negative() {
        assert_eq!(checked_index(0), Ok(0));
        assert_eq!(checked_index(10), Ok(10));
    }

    #[test]
    fn checked_index_rejects_negative() {
        assert_eq!(checked_index(-1), Err(MathError::NegativeIndex(-1)));
        assert_eq!(
            checked_index(i64::MIN),
            Err(MathError::NegativeIndex(i64::MIN))
        );
    }

    #[test]
    fn math_error_display() {
        let err = MathError::Overflow(94);
        assert_eq!(err.to_string(), "F(94) overflows u64 (maximum index is 93)");

        let err = MathError::Config("unknown calculator: fast".into());
        assert_eq!(
            err.to_string(),
            "configuration error: unknown calculator: fast"
        );

        let err = MathError::RecursionLimit { n: 50, limit: 40 };
        assert_eq!(
            err.to_string(),
            "index 50 exceeds the recursive calculator limit of 40"
        );
    }
}
