//! # booking
//!
//! Command-line front end for the booking validation engine.
//!
//! `main` parses arguments and installs logging, then [`start`] loads
//! configuration and dispatches the subcommand. Every failure after parsing
//! comes back as a [`CliError`] and is turned into a report and exit code in
//! one place, [`handle_error`].
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success / booking confirmed      |
//! |  1   | Internal / system error          |
//! |  2   | User error / booking rejected    |
//! |  3   | Resource not found               |
//! |  4   | Configuration error              |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let colored = !cli.global.no_color && std::io::stderr().is_terminal();
    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose, colored),
    }
}

/// Load configuration, set up output and run the chosen subcommand.
#[instrument(skip_all, fields(command))]
fn start(cli: Cli) -> CliResult<()> {
    tracing::Span::current().record("command", command_name(&cli.command));
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        config = ?cli.global.config,
        "CLI started"
    );

    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;

    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), color = output.supports_color(), "Output resolved");

    let outcome = match cli.command {
        Commands::Validate(cmd) => commands::validate::execute(cmd, config, output),
        Commands::Cities(cmd) => commands::cities::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    };
    outcome?;

    info!("Done");
    Ok(())
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Validate(_) => "validate",
        Commands::Cities(_) => "cities",
        Commands::Init(_) => "init",
        Commands::Completions(_) => "completions",
        Commands::Config(_) => "config",
    }
}

/// Log `err`, print its report to stderr and map it to an exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();

    // Rejected fields are already on stdout.
    if !err.is_reported() {
        eprint!("{}", err.report(verbose, colored));
    }

    ExitCode::from(err.exit_code())
}
