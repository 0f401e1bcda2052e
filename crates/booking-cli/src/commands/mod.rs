//! Subcommand handlers.
//!
//! Each handler receives already-parsed arguments, the loaded
//! [`AppConfig`] and an [`OutputManager`]; engine wiring shared between
//! handlers lives here.

use std::path::PathBuf;

use tracing::debug;

use booking_adapters::{FileCatalog, InMemoryCatalog};
use booking_core::application::{BookingService, CityCatalog, Clock};

use crate::{
    cli::RulesArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod cities;
pub mod completions;
pub mod config;
pub mod init;
pub mod validate;

/// Rule settings after applying command-line overrides to config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRules {
    pub min_lead_days: i64,
    pub cities_file: Option<PathBuf>,
}

impl ResolvedRules {
    /// Flags win over the config file and environment.
    pub fn resolve(args: &RulesArgs, config: &AppConfig) -> Self {
        Self {
            min_lead_days: args.min_lead_days.unwrap_or(config.rules.min_lead_days),
            cities_file: args
                .cities_file
                .clone()
                .or_else(|| config.rules.cities_file.clone()),
        }
    }

    /// The catalog named by `cities_file`, or the built-in list.
    pub fn catalog(&self) -> Box<dyn CityCatalog> {
        match &self.cities_file {
            Some(path) => Box::new(FileCatalog::new(path.clone())),
            None => Box::new(InMemoryCatalog::with_builtin()),
        }
    }
}

/// Build the validation engine for one CLI invocation.
///
/// Rule or catalog problems surface here, before any request is read.
pub fn build_service(
    args: &RulesArgs,
    config: &AppConfig,
    clock: Box<dyn Clock>,
) -> CliResult<BookingService> {
    let rules = ResolvedRules::resolve(args, config);
    debug!(?rules, "Resolved validation rules");

    let catalog = rules.catalog();
    BookingService::from_catalog(catalog.as_ref(), rules.min_lead_days, clock)
        .with_cli_context(|| format!("building rules from {}", catalog.source_name()))
}
