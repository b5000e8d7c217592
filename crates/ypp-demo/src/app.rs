//! Application entry point and dispatch.

use anyhow::{Context, Result};

use ypp_cli::output::banner;
use ypp_cli::presenter::{checks_json, fibonacci_json, CLIResultPresenter, ResultPresenter};
use ypp_cli::selftest::default_checks;
use ypp_cli::{run_checks, ui};
use ypp_math::constants::{DEMO_HEIGHT, DEMO_WIDTH};
use ypp_math::selection::{
    analyze_comparison_results, execute_calculations, get_calculators_to_run,
};
use ypp_math::{checked_index, DefaultFactory, Shape};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);

    match &config.command {
        None | Some(Command::Demo) => run_demo(&presenter),
        Some(Command::Test) => run_self_test(&presenter),
        Some(Command::Area { width, height }) => run_area(
            Shape::Rectangle {
                width: *width,
                height: *height,
            },
            &presenter,
        ),
        Some(Command::Circle { radius }) => run_area(Shape::Circle { radius: *radius }, &presenter),
        Some(Command::Fib { n, algo }) => run_fibonacci(*n, algo, &presenter),
        Some(Command::Version) => {
            println!("{}", crate::version::full_version());
            Ok(())
        }
        Some(Command::Completion { shell }) => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            ypp_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_demo(presenter: &CLIResultPresenter) -> Result<()> {
    tracing::debug!(
        version = crate::version::version(),
        math_utils = ypp_math::MATH_UTILS_VERSION,
        "starting demo"
    );

    if !presenter.is_json() && !presenter.is_quiet() {
        println!("{}", banner("YPP Demo Application"));
    }

    let shape = Shape::Rectangle {
        width: DEMO_WIDTH,
        height: DEMO_HEIGHT,
    };
    presenter.present_area(&shape, shape.area());
    Ok(())
}

fn run_self_test(presenter: &CLIResultPresenter) -> Result<()> {
    let json = presenter.is_json();
    if !json && !presenter.is_quiet() {
        println!("{}", banner("YPP Demo - Unit Tests"));
    }

    let mut reported = Vec::new();
    let result = run_checks(&default_checks(), |outcome| {
        if !json {
            if outcome.passed {
                if !presenter.is_quiet() {
                    println!("{}", ui::check_passed_line(&outcome.name));
                }
            } else {
                let detail = outcome.detail.as_deref().unwrap_or_default();
                eprintln!("{}", ui::check_failed_line(&outcome.name, detail));
            }
        }
        reported.push(outcome.clone());
    });

    if json {
        println!("{}", checks_json(&reported));
    }

    let outcomes = result?;
    tracing::debug!(checks = outcomes.len(), "self-test complete");
    if !json && !presenter.is_quiet() {
        ui::print_success("All tests passed! ✅");
    }
    Ok(())
}

fn run_area(shape: Shape, presenter: &CLIResultPresenter) -> Result<()> {
    let shape = shape.validate()?;
    let area = shape.area();
    tracing::debug!(?shape, area, "computed area");
    presenter.present_area(&shape, area);
    Ok(())
}

fn run_fibonacci(n: i64, algo: &str, presenter: &CLIResultPresenter) -> Result<()> {
    let n = checked_index(n)?;
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(algo, &factory)?;
    let results = execute_calculations(&calculators, n);

    if presenter.is_json() {
        println!("{}", fibonacci_json(&results));
    }

    if let [single] = results.as_slice() {
        single.outcome.clone()?;
        if !presenter.is_json() {
            presenter.present_fibonacci(single);
        }
        return Ok(());
    }

    presenter.present_comparison(&results);
    analyze_comparison_results(&results)
        .with_context(|| format!("cross-check of F({n}) with '{algo}' failed"))?;

    if !presenter.is_json() {
        if let Some(first_ok) = results.iter().find(|r| r.outcome.is_ok()) {
            presenter.present_fibonacci(first_ok);
        }
    }
    Ok(())
}
