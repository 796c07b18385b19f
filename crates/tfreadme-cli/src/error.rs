//! Errors surfaced by the binary.
//!
//! Every failure ends up as a [`CliError`], which knows its exit status and
//! what the user can do about it.

use std::error::Error as _;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use tfreadme_core::error::{ErrorCategory as CoreCategory, TfReadmeError};

use crate::config::{AppConfig, LOCAL_CONFIG_FILE};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// No `--name`, no configured name, and the working directory has no
    /// usable last component.
    #[error("Cannot determine module name from {path}")]
    ModuleNameUnavailable { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("README generation failed: {0}")]
    Core(#[from] TfReadmeError),

    /// Writing to stdout/stderr or reading the working directory failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// Coarse classification driving the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleNameUnavailable { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleNameUnavailable { .. } => vec![
                "Pass the module name explicitly: tfreadme generate --name <NAME>".into(),
                format!("Or set render.module_name in {LOCAL_CONFIG_FILE}"),
            ],
            Self::ConfigError { .. } => vec![
                format!(
                    "Config files are read from --config, {LOCAL_CONFIG_FILE}, or {}",
                    AppConfig::config_path().display()
                ),
                "Use 'tfreadme config list' to see the effective configuration".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "A closed pipe on stdout also ends up here".into(),
            ],
        }
    }

    /// Multi-line report for stderr.
    ///
    /// With `verbose` the chain of causes is included; without it a hint
    /// about `-v` is appended instead. `colored` adds ANSI styling.
    pub fn report(&self, verbose: bool, colored: bool) -> String {
        let mut out = String::new();

        if colored {
            let _ = writeln!(out, "\n{} {}", "\u{2717}".red().bold(), "Error:".red().bold());
            let _ = writeln!(out, "  {}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                if colored {
                    let _ = writeln!(out, "  {} {}", "\u{2192}".dimmed(), err.to_string().dimmed());
                } else {
                    let _ = writeln!(out, "  Caused by: {err}");
                }
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = "Suggestions:";
            if colored {
                let _ = writeln!(out, "\n{}", heading.yellow().bold());
            } else {
                let _ = writeln!(out, "\n{heading}");
            }
            for hint in &suggestions {
                let _ = writeln!(out, "  {hint}");
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            if colored {
                let _ = writeln!(out, "\n{} {}", "\u{2139}".blue(), hint.dimmed());
            } else {
                let _ = writeln!(out, "\n{hint}");
            }
        }

        out
    }

    /// Emit the failure as a tracing event.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(error = %self, "run failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "run failed");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}
