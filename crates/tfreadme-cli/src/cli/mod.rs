//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tfreadme",
    bin_name = "tfreadme",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a README for a Terraform module",
    long_about = "tfreadme reads a module's variable and output declarations \
                  and renders them as markdown tables under a fixed set of \
                  README sections.",
    after_help = "EXAMPLES:\n\
        \x20 tfreadme generate\n\
        \x20 tfreadme generate --variables vars.tf --outputs outs.tf -o README.md\n\
        \x20 tfreadme config list\n\
        \x20 tfreadme completions bash > /usr/share/bash-completion/completions/tfreadme",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the README markdown.
    #[command(
        visible_alias = "gen",
        about = "Generate README markdown for a module",
        after_help = "EXAMPLES:\n\
            \x20 tfreadme generate                       # variables.tf + outputs.tf in CWD\n\
            \x20 tfreadme generate --name network        # override the title\n\
            \x20 tfreadme generate -o README.md --force  # replace an existing README"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tfreadme completions bash > ~/.local/share/bash-completion/completions/tfreadme\n\
            \x20 tfreadme completions zsh  > ~/.zfunc/_tfreadme\n\
            \x20 tfreadme completions fish > ~/.config/fish/completions/tfreadme.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tfreadme configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tfreadme config get inputs.variables\n\
            \x20 tfreadme config list\n\
            \x20 tfreadme config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `tfreadme generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Variable declarations file. Defaults to the config value, then
    /// `variables.tf`.
    #[arg(
        long = "variables",
        value_name = "FILE",
        env = "TFREADME_VARIABLES",
        help = "Path to variables file [default: variables.tf]"
    )]
    pub variables: Option<PathBuf>,

    /// Output declarations file.
    #[arg(
        long = "outputs",
        value_name = "FILE",
        env = "TFREADME_OUTPUTS",
        help = "Path to outputs file [default: outputs.tf]"
    )]
    pub outputs: Option<PathBuf>,

    /// Module name used in the title.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Module name for the title [default: current directory name]"
    )]
    pub name: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the README to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Replace an existing output file.
    #[arg(long = "force", requires = "output", help = "Overwrite an existing output file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tfreadme completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tfreadme config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `inputs.variables`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
