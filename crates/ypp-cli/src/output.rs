//! CLI output formatting.

use std::time::Duration;

/// Format an area with two decimals.
#[must_use]
pub fn format_area(area: f64) -> String {
    format!("{area:.2}")
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Underline a title with `=` of the same width.
#[must_use]
pub fn banner(title: &str) -> String {
    format!("{title}\n{}", "=".repeat(title.chars().count()))
}
