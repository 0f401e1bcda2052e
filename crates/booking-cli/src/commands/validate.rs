//! Implementation of the `booking validate` command.

use tracing::{info, instrument};

use booking_adapters::{FixedClock, SystemClock};
use booking_core::{
    application::{BookingService, Clock},
    domain::{BookingRequest, ValidationOutcome},
};

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Validate one booking request and render the outcome.
///
/// A rejected booking prints every failing field and then returns
/// [`CliError::BookingRejected`] so the process exits non-zero.
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => Box::new(SystemClock::new()),
    };
    let service = super::build_service(&args.rules, &config, clock)?;

    let date = submitted_date(&service, args.date, args.in_days)?;
    let request = BookingRequest::builder()
        .city(args.city)
        .date(date)
        .name(args.name)
        .phone(args.phone)
        .agreement(args.agree)
        .build();

    let outcome = service.validate(&request);
    render(&outcome, &output)?;

    match outcome {
        ValidationOutcome::Accepted { confirmed_date } => {
            info!(%confirmed_date, "Booking confirmed");
            Ok(())
        }
        ValidationOutcome::Rejected { errors } => Err(CliError::BookingRejected {
            failed: errors.len(),
        }),
    }
}

/// The text placed in the form's date field.
///
/// No date at all is submitted as an empty field.
fn submitted_date(
    service: &BookingService,
    date: Option<String>,
    in_days: Option<i64>,
) -> CliResult<String> {
    match (date, in_days) {
        (Some(date), _) => Ok(date),
        (None, Some(days)) => service
            .planning_date(days)
            .map(|d| d.to_string())
            .ok_or_else(|| CliError::InvalidInput {
                message: format!("today + {days} days is outside the supported calendar"),
                source: None,
            }),
        (None, None) => Ok(String::new()),
    }
}

fn render(outcome: &ValidationOutcome, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(outcome)?;
        return Ok(());
    }

    match outcome {
        ValidationOutcome::Accepted { .. } => {
            if let Some(notification) = outcome.notification() {
                output.success(&notification)?;
            }
        }
        ValidationOutcome::Rejected { errors } => {
            for error in errors {
                output.error(&error.to_string())?;
            }
        }
    }
    Ok(())
}
