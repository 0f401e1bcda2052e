//! `booking config`: show the configuration after all layers are merged.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `config get`, in display order.
const KEYS: [&str; 4] = [
    "rules.min_lead_days",
    "rules.cities_file",
    "output.no_color",
    "output.format",
];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List if output.is_json() => {
            output.json(&config)?;
        }

        ConfigCommands::List => {
            output.header("Effective configuration:")?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render configuration as TOML: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(rendered.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

/// Resolve a dotted key against the serialized config.
///
/// An optional setting that is unset reads as `builtin`, the behaviour it
/// falls back to.
fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    if !KEYS.contains(&key) {
        return Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        });
    }

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("cannot inspect configuration: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key.split('.').try_fold(&tree, |node, part| node.get(part));
    Ok(match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "builtin".into(),
    })
}
