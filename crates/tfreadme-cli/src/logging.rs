//! Diagnostics setup.
//!
//! The subscriber is installed here and nowhere else; the library crates
//! only emit events. Everything is written to stderr because stdout may be
//! piped straight into a README.
//!
//! `-q` shows errors only, no flag shows warnings, and each `-v` goes one
//! level further down to `trace`. A `RUST_LOG` in the environment replaces
//! the computed filter entirely.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that receive the computed level. Dependencies stay at `off`.
const TARGETS: [&str; 3] = ["tfreadme", "tfreadme_core", "tfreadme_adapters"];

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))
            .context("building the log filter")?,
    };

    let stderr_is_tty = io::stderr().is_terminal();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(stderr_is_tty && !args.no_color)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("installing the tracing subscriber")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS.map(|target| format!("{target}={level}")).join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        let levels: Vec<_> = (0..=4).map(|v| level_for(&flags(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_means_errors_only() {
        assert_eq!(level_for(&flags(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&flags(2, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_every_target() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "tfreadme=debug,tfreadme_core=debug,tfreadme_adapters=debug"
        );
    }

    #[test]
    fn directives_parse() {
        assert!(EnvFilter::try_new(directives(LevelFilter::INFO)).is_ok());
    }
}
