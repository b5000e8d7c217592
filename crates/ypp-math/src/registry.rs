//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{FibCalculator, MathError};
use crate::fibonacci::{Iterative, Memoized, NaiveRecursive};

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn FibCalculator>, MathError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Cached calculators are shared, so a `memo` calculator keeps its cache
/// across lookups.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn FibCalculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn FibCalculator>, MathError> {
        match name {
            "recursive" | "naive" => Ok(Arc::new(NaiveRecursive::new())),
            "iterative" => Ok(Arc::new(Iterative::new())),
            "memo" | "memoized" => Ok(Arc::new(Memoized::new())),
            _ => Err(MathError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn FibCalculator>, MathError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        tracing::debug!(name, calculator = calc.name(), "created calculator");
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["recursive", "iterative", "memo"]
    }
}
