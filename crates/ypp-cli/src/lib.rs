//! # ypp-cli
//!
//! CLI output, result presentation, the self-test harness, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod selftest;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use selftest::{run_checks, CheckFailure, CheckOutcome};
