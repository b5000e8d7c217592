//! Version information.

use ypp_math::MATH_UTILS_VERSION;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string including the math library version.
#[must_use]
pub fn full_version() -> String {
    format!("ypp-demo {} (math-utils {MATH_UTILS_VERSION})", version())
}
