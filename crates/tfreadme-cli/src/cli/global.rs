//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More diagnostics on stderr: `-v` info (reports files without
    /// blocks), `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and the generated document.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain status and error messages. Also set by `NO_COLOR`
    /// (<https://no-color.org>).
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Read settings from FILE instead of `.tfreadme.toml` or the user
    /// config directory.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
