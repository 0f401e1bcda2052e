//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use booking_core::domain::CalendarDate;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "booking",
    bin_name = "booking",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate home-delivery appointment bookings",
    long_about = "Checks a booking request (city, date, name, phone, consent) \
                  against the serviceable-city list and the minimum lead time, \
                  reporting every failing field at once.",
    after_help = "EXAMPLES:\n\
        \x20 booking validate --city Москва --in-days 3 --name \"Иван Иванов\" --phone +79998887766 --agree\n\
        \x20 booking validate --city Казань --date 30.02.2023 --name Иван --phone +79998887766 --agree\n\
        \x20 booking cities\n\
        \x20 booking completions bash > /usr/share/bash-completion/completions/booking",
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
    /// Validate one booking request.
    #[command(
        visible_alias = "check",
        about = "Validate a booking request",
        after_help = "EXAMPLES:\n\
            \x20 booking validate --city Санкт-Петербург --in-days 6 --name \"Иван Иванов-Петров\" --phone +79998887766 --agree\n\
            \x20 booking validate --city Минск --date 20.10.2026 --name Иван --phone +79998887766 --agree --today 14.10.2026\n\
            \x20 booking --output-format json validate --city Москва --in-days 1 --name Иван --phone +79998887766"
    )]
    Validate(ValidateArgs),

    /// List serviceable cities.
    #[command(
        visible_alias = "ls",
        about = "List serviceable cities",
        after_help = "EXAMPLES:\n\
            \x20 booking cities\n\
            \x20 booking cities --format json\n\
            \x20 booking cities --cities-file ./cities.toml"
    )]
    Cities(CitiesArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 booking init           # platform config directory\n\
            \x20 booking init --local   # ./booking.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 booking completions bash > ~/.local/share/bash-completion/completions/booking\n\
            \x20 booking completions zsh  > ~/.zfunc/_booking\n\
            \x20 booking completions fish > ~/.config/fish/completions/booking.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 booking config get rules.min_lead_days\n\
            \x20 booking config list\n\
            \x20 booking config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `booking validate`.
///
/// Omitted text fields are submitted empty, like an untouched form input.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Requested city.
    #[arg(long = "city", value_name = "CITY", default_value = "", hide_default_value = true)]
    pub city: String,

    /// Appointment date as typed, `dd.mm.yyyy`.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "DATE",
        conflicts_with = "in_days",
        help = "Appointment date (dd.mm.yyyy)"
    )]
    pub date: Option<String>,

    /// Appointment date as an offset from today (may be negative).
    #[arg(
        long = "in-days",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Appointment date as today + N days"
    )]
    pub in_days: Option<i64>,

    /// Customer name.
    #[arg(long = "name", value_name = "NAME", default_value = "", hide_default_value = true)]
    pub name: String,

    /// Phone number, `+` and 11 digits.
    #[arg(long = "phone", value_name = "PHONE", default_value = "", hide_default_value = true)]
    pub phone: String,

    /// Tick the consent checkbox.
    #[arg(long = "agree", help = "Accept the personal data agreement")]
    pub agree: bool,

    /// Pin "today" instead of reading the system clock.
    #[arg(
        long = "today",
        value_name = "DATE",
        value_parser = parse_calendar_date,
        help = "Treat DATE (dd.mm.yyyy) as today"
    )]
    pub today: Option<CalendarDate>,

    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Overrides for the configured validation rules.
#[derive(Debug, Clone, Default, Args)]
pub struct RulesArgs {
    /// Minimum days between today and the appointment.
    #[arg(
        long = "min-lead-days",
        value_name = "DAYS",
        allow_hyphen_values = true,
        help = "Override the minimum lead time"
    )]
    pub min_lead_days: Option<i64>,

    /// Read serviceable cities from a file instead of the built-in list.
    #[arg(
        long = "cities-file",
        value_name = "FILE",
        help = "City list file (.toml or one city per line)"
    )]
    pub cities_file: Option<PathBuf>,
}

fn parse_calendar_date(raw: &str) -> Result<CalendarDate, String> {
    raw.parse().map_err(|e: booking_core::domain::DomainError| e.to_string())
}

// ── cities ────────────────────────────────────────────────────────────────────

/// Arguments for `booking cities`.
#[derive(Debug, Args)]
pub struct CitiesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: CitiesFormat,

    #[command(flatten)]
    pub rules: RulesArgs,
}

/// Output format for the `cities` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CitiesFormat {
    /// One city per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `booking init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `booking.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `booking completions`.
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

/// Subcommands for `booking config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `rules.min_lead_days`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
