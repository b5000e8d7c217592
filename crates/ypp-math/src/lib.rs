//! # ypp-math
//!
//! Area and Fibonacci calculators for the YPP demo project.

pub mod area;
pub mod calculator;
pub mod constants;
pub mod fibonacci;
pub mod registry;
pub mod selection;

// Re-exports
pub use area::{approx_eq, calculate_area, calculate_circle_area, Shape};
pub use calculator::{checked_index, FibCalculator, MathError};
pub use constants::{
    exit_codes, AREA_TOLERANCE, FIB_TABLE, MATH_UTILS_VERSION, MAX_FIB_U64, MAX_RECURSIVE_INDEX,
};
pub use fibonacci::{fibonacci, fibonacci_recursive, Iterative, Memoized, NaiveRecursive};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use selection::CalculationResult;
