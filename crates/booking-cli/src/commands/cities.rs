//! Implementation of the `booking cities` command.

use booking_adapters::SystemClock;

use crate::{
    cli::{CitiesArgs, CitiesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: CitiesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // Goes through the engine so a broken city list fails the same way
    // `validate` would.
    let service = super::build_service(&args.rules, &config, Box::new(SystemClock::new()))?;
    let cities: Vec<&str> = service.rules().cities().collect();

    if args.format == CitiesFormat::Json || output.is_json() {
        output.json(&cities)?;
        return Ok(());
    }

    output.header(&format!("Serviceable cities ({}):", cities.len()))?;
    for city in cities {
        output.print(city)?;
    }

    Ok(())
}
