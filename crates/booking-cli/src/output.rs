//! Writing command results to stdout.
//!
//! Logs go to stderr through `tracing`; everything a caller might parse goes
//! through [`OutputManager`].

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Leading symbol and colour of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Success,
    Failure,
    Warning,
}

impl Mark {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Failure => "\u{2717}", // ✗
            Self::Warning => "\u{26a0}", // ⚠
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Failure => Style::new().red(),
            Self::Warning => Style::new().yellow(),
        }
    }

    /// Failures survive `--quiet`.
    const fn always_shown(self) -> bool {
        matches!(self, Self::Failure)
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` wins over `output.format`; `auto` from either
    /// resolves against stdout being a terminal. Colour is only used for
    /// the human format.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };

        let format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            resolved => resolved,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.mark(Mark::Success, msg)
    }

    /// A failure line. Printed even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.mark(Mark::Failure, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.mark(Mark::Warning, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    /// Pretty-printed JSON; written regardless of `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn mark(&self, mark: Mark, msg: &str) -> io::Result<()> {
        if self.quiet && !mark.always_shown() {
            return Ok(());
        }
        self.term.write_line(&self.marked(mark, msg))
    }

    fn marked(&self, mark: Mark, msg: &str) -> String {
        if self.color {
            let symbol = mark.symbol();
            format!(
                "{} {}",
                symbol.style(mark.style().bold()),
                msg.style(mark.style())
            )
        } else {
            format!("{} {msg}", mark.symbol())
        }
    }
}
