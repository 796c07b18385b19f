//! `tfreadme`: README generator for Terraform modules.
//!
//! Exit status: 0 on success, 1 internal failure, 2 bad input (including
//! argument errors), 3 missing source file, 4 configuration problem.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Also reached for --help and --version, which clap prints to stdout.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("tfreadme: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "arguments parsed"
    );

    let report = Report {
        verbose: cli.global.verbose > 0,
        color: !cli.global.no_color,
    };

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            return report.failure(CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            });
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let report = Report {
        color: output.supports_color(),
        ..report
    };

    match run(cli.command, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report.failure(e),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// How a failed run is reported on stderr.
#[derive(Debug, Clone, Copy)]
struct Report {
    verbose: bool,
    color: bool,
}

impl Report {
    fn failure(self, err: CliError) -> ExitCode {
        err.log();

        let colored = self.color && std::io::stderr().is_terminal();
        eprint!("{}", err.report(self.verbose, colored));

        ExitCode::from(err.exit_code())
    }
}
