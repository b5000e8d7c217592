//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a passed check line.
#[must_use]
pub fn check_passed_line(name: &str) -> String {
    if is_color_disabled() {
        format!("✓ {name} test passed")
    } else {
        format!("{} {name} test passed", style("✓").green().bold())
    }
}

/// Render a failed check line.
#[must_use]
pub fn check_failed_line(name: &str, detail: &str) -> String {
    if is_color_disabled() {
        format!("✗ {name} test failed: {detail}")
    } else {
        format!("{} {name} test failed: {detail}", style("✗").red().bold())
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
