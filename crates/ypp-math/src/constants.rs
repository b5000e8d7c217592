//! Constants for the area and Fibonacci calculators.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Largest index accepted by the naive recursive calculator.
///
/// F(40) already takes ~330 million calls; anything above that is better
/// served by the iterative or memoized calculators.
pub const MAX_RECURSIVE_INDEX: u64 = 40;

/// Absolute tolerance used when comparing computed areas.
pub const AREA_TOLERANCE: f64 = 0.001;

/// Rectangle width used by the demo program.
pub const DEMO_WIDTH: f64 = 5.0;

/// Rectangle height used by the demo program.
pub const DEMO_HEIGHT: f64 = 3.0;

/// Math library version, injected through `MATH_LIB_VERSION` at build time.
pub const MATH_UTILS_VERSION: &str = match option_env!("MATH_LIB_VERSION") {
    Some(v) => v,
    None => "unknown",
};

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (invalid input, overflow).
    pub const ERROR_GENERIC: i32 = 1;
    /// A self-test check failed.
    pub const ERROR_CHECK_FAILED: i32 = 2;
    /// Calculators disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[5], 5);
        assert_eq!(FIB_TABLE[10], 55);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }

    #[test]
    fn version_is_never_empty() {
        assert!(!MATH_UTILS_VERSION.is_empty());
    }

    #[test]
    fn demo_dimensions() {
        assert!((DEMO_WIDTH * DEMO_HEIGHT - 15.0).abs() < AREA_TOLERANCE);
    }
}
