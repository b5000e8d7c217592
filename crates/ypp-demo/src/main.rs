//! YPP demo — area and Fibonacci calculators.

use std::process::ExitCode;

use ypp_demo_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // RUST_LOG overrides the flag-derived default level.
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(config.env_filter(&rust_log))
        .init();

    let result = app::run(&config);
    if let Err(err) = &result {
        ypp_cli::ui::print_error(&format!("{err:#}"));
    }
    let code = errors::exit_code(&result);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
