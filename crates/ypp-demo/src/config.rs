//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// YPP demo — area and Fibonacci calculators with a built-in self-test.
#[derive(Parser, Debug)]
#[command(name = "ypp-demo", version, about)]
pub struct AppConfig {
    /// Verbose output and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the demo application (the default).
    Demo,

    /// Run the built-in self-test suite.
    Test,

    /// Area of a rectangle.
    Area {
        /// Rectangle width.
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        /// Rectangle height.
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Area of a circle.
    Circle {
        /// Circle radius.
        #[arg(short, long, allow_negative_numbers = true)]
        radius: f64,
    },

    /// Fibonacci number F(n).
    Fib {
        /// Fibonacci index.
        #[arg(short, long, env = "YPP_N", allow_negative_numbers = true)]
        n: i64,

        /// Calculator to use: recursive, iterative, memo, or all.
        #[arg(long, default_value = "iterative", env = "YPP_ALGO")]
        algo: String,
    },

    /// Print version information.
    Version,

    /// Generate shell completion.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default tracing level for these flags.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Build the log filter from `RUST_LOG` directives.
    ///
    /// Without directives the flag-derived level applies; `--verbose` always
    /// enables debug events on top of whatever `RUST_LOG` selects.
    #[must_use]
    pub fn env_filter(&self, rust_log: &str) -> EnvFilter {
        let filter = EnvFilter::builder()
            .with_default_directive(self.log_level().into())
            .parse_lossy(rust_log);
        if self.verbose {
            filter.add_directive(tracing::Level::DEBUG.into())
        } else {
            filter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("ypp-demo").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_subcommand_means_demo() {
        let config = parse(&[]);
        assert_eq!(config.command, None);
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn parse_area() {
        let config = parse(&["area", "--width", "5", "--height", "3"]);
        assert_eq!(
            config.command,
            Some(Command::Area {
                width: 5.0,
                height: 3.0
            })
        );
    }

    #[test]
    fn parse_negative_radius() {
        let config = parse(&["circle", "-r", "-2.5"]);
        assert_eq!(config.command, Some(Command::Circle { radius: -2.5 }));
    }

    #[test]
    fn parse_fib_with_globals_after_subcommand() {
        let config = parse(&["fib", "-n", "10", "--algo", "all", "-v"]);
        assert!(config.verbose);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(
            config.command,
            Some(Command::Fib {
                n: 10,
                algo: "all".into()
            })
        );
    }

    #[test]
    fn parse_negative_index() {
        let config = parse(&["fib", "-n", "-3"]);
        assert!(matches!(config.command, Some(Command::Fib { n: -3, .. })));
    }

    #[test]
    fn env_filter_defaults_to_warn() {
        let filter = parse(&[]).env_filter("");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn env_filter_honors_rust_log_without_verbose() {
        let filter = parse(&["demo"]).env_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn env_filter_verbose_enables_debug() {
        let filter = parse(&["-v", "demo"]).env_filter("error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = AppConfig::try_parse_from(["ypp-demo", "-q", "-v", "test"]);
        assert!(result.is_err());
    }
}
