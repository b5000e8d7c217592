//! Rectangle and circle areas.
//!
//! The free functions are pure and do no validation: negative or NaN inputs
//! propagate into the result. Callers that take dimensions from user input
//! go through [`Shape::validate`] first.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculator::MathError;

/// Area of a `width` x `height` rectangle.
///
/// # Example
/// ```
/// assert_eq!(ypp_math::calculate_area(5.0, 3.0), 15.0);
/// ```
#[must_use]
pub fn calculate_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Area of a circle of the given radius.
#[must_use]
pub fn calculate_circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// A shape whose area can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl Shape {
    /// Compute the area of this shape.
    #[must_use]
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { width, height } => calculate_area(width, height),
            Shape::Circle { radius } => calculate_circle_area(radius),
        }
    }

    /// Reject negative, infinite and NaN dimensions.
    pub fn validate(self) -> Result<Self, MathError> {
        match self {
            Shape::Rectangle { width, height } => {
                check_dimension("width", width)?;
                check_dimension("height", height)?;
            }
            Shape::Circle { radius } => check_dimension("radius", radius)?,
        }
        Ok(self)
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), MathError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        tracing::debug!(name, value, "rejected dimension");
        Err(MathError::InvalidDimension { name, value })
    }
}

/// Whether two areas agree within `tolerance`.
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
