//! YPP demo library — application logic for the `ypp-demo` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
