//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so they may appear
//! before or after the subcommand name.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

const HEADING: &str = "Global options";

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help_heading = HEADING,
        long_help = "Raise the log level written to stderr:
    (none)  - warnings and errors
    -v      - rules loaded and the final outcome
    -vv     - per-request summary
    -vvv    - every rejected field"
    )]
    pub verbose: u8,

    /// Print only errors and validation failures.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help_heading = HEADING
    )]
    pub quiet: bool,

    /// Never emit ANSI colour codes. Honours `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help_heading = HEADING)]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help_heading = HEADING
    )]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help_heading = HEADING
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// Status lines without colour.
    Plain,
    /// One JSON document per command.
    Json,
}
