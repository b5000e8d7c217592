//! Fibonacci calculators.
//!
//! Three implementations of [`FibCalculator`]:
//! - [`NaiveRecursive`]: the textbook `f(n-1) + f(n-2)` definition, bounded
//!   by [`MAX_RECURSIVE_INDEX`].
//! - [`Iterative`]: linear loop with overflow checks.
//! - [`Memoized`]: top-down recursion over a shared cache.

use parking_lot::Mutex;

use crate::calculator::{FibCalculator, MathError};
use crate::constants::{FIB_TABLE, MAX_FIB_U64, MAX_RECURSIVE_INDEX};

/// Compute F(n) from the precomputed table.
///
/// Agrees with the reference definition [`fibonacci_recursive`] for every
/// n <= 93 and reports [`MathError::Overflow`] past that.
///
/// # Example
/// ```
/// assert_eq!(ypp_math::fibonacci(10), Ok(55));
/// assert!(ypp_math::fibonacci(94).is_err());
/// ```
pub fn fibonacci(n: u64) -> Result<u64, MathError> {
    usize::try_from(n)
        .ok()
        .and_then(|i| FIB_TABLE.get(i))
        .copied()
        .ok_or(MathError::Overflow(n))
}

/// The literal recursive definition: `n` for `n <= 1`, otherwise
/// `f(n-1) + f(n-2)`.
///
/// Runs in exponential time and has no overflow check; keep `n` small.
#[must_use]
pub fn fibonacci_recursive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Naive recursive calculator.
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl FibCalculator for NaiveRecursive {
    fn compute(&self, n: u64) -> Result<u64, MathError> {
        if n > MAX_RECURSIVE_INDEX {
            return Err(MathError::RecursionLimit {
                n,
                limit: MAX_RECURSIVE_INDEX,
            });
        }
        Ok(fibonacci_recursive(n))
    }

    fn name(&self) -> &str {
        "NaiveRecursive"
    }
}

/// Iterative calculator: walks the pair `(F(i-1), F(i))` up to `n`.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl FibCalculator for Iterative {
    fn compute(&self, n: u64) -> Result<u64, MathError> {
        if n == 0 {
            return Ok(0);
        }
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 1..n {
            let next = a.checked_add(b).ok_or(MathError::Overflow(n))?;
            a = b;
            b = next;
        }
        Ok(b)
    }

    fn name(&self) -> &str {
        "Iterative"
    }
}

/// Memoized calculator. The cache is shared across calls and only grows.
pub struct Memoized {
    cache: Mutex<Vec<u64>>,
}

impl Memoized {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(vec![0, 1]),
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    fn lookup(cache: &mut Vec<u64>, n: usize) -> u64 {
        if let Some(&v) = cache.get(n) {
            return v;
        }
        let v = Self::lookup(cache, n - 1) + Self::lookup(cache, n - 2);
        // Recursion fills every smaller index first, so `n` is the next slot.
        cache.push(v);
        v
    }
}

impl Default for Memoized {
    fn default() -> Self {
        Self::new()
    }
}

impl FibCalculator for Memoized {
    fn compute(&self, n: u64) -> Result<u64, MathError> {
        if n > MAX_FIB_U64 {
            return Err(MathError::Overflow(n));
        }
        let idx = usize::try_from(n).map_err(|_| MathError::Overflow(n))?;
        let mut cache = self.cache.lock();
        let before = cache.len();
        let value = Self::lookup(&mut cache, idx);
        if cache.len() > before {
            tracing::trace!(n, added = cache.len() - before, "memo cache extended");
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "Memoized"
    }
}
