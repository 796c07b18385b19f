//! Terminal output.
//!
//! stdout carries results only: the generated README or the value asked
//! for by `config`. Status lines go to stderr, so
//! `tfreadme generate > README.md` never captures them.

use std::io;

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// `--no-color` and `output.no_color` both disable styling.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Write the generated document verbatim.
    pub fn document(&self, markdown: &str) -> io::Result<()> {
        self.stdout.write_str(markdown)?;
        self.stdout.flush()
    }

    /// One result line on stdout. Shown even with `--quiet`.
    pub fn print(&self, line: &str) -> io::Result<()> {
        self.stdout.write_line(line)
    }

    /// `✓ msg` on stderr.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Some('\u{2713}'), msg, Style::new().green())
    }

    /// Section title on stderr.
    pub fn header(&self, title: &str) -> io::Result<()> {
        self.status(None, title, Style::new().cyan().bold())
    }

    fn status(&self, marker: Option<char>, msg: &str, style: Style) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (marker, self.no_color) {
            (Some(marker), true) => format!("{marker} {msg}"),
            (None, true) => msg.to_owned(),
            (Some(marker), false) => {
                format!("{} {}", marker.style(style.bold()), msg.style(style))
            }
            (None, false) => msg.style(style).to_string(),
        };
        self.stderr.write_line(&line)
    }
}
