//! `tfreadme config`: show the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `config get`, in `config list` order.
const KEYS: [&str; 4] = [
    "inputs.variables",
    "inputs.outputs",
    "render.module_name",
    "output.no_color",
];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}' (known keys: {})", KEYS.join(", ")),
                source: None,
            })?;
            output.print(&format!("{key} = {value:?}"))?;
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render configuration as TOML: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Effective configuration:")?;
            output.print(rendered.trim_end())?;
        }
        ConfigCommands::Path => output.print(&AppConfig::config_path().display().to_string())?,
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> Option<String> {
    let value = match key {
        "inputs.variables" => config.inputs.variables.display().to_string(),
        "inputs.outputs" => config.inputs.outputs.display().to_string(),
        "render.module_name" => config.render.module_name.clone().unwrap_or_default(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_resolves() {
        let config = AppConfig::default();
        for key in KEYS {
            assert!(lookup(&config, key).is_some(), "{key}");
        }
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(lookup(&config, "inputs.variables").as_deref(), Some("variables.tf"));
        assert_eq!(lookup(&config, "inputs.outputs").as_deref(), Some("outputs.tf"));
        assert_eq!(lookup(&config, "render.module_name").as_deref(), Some(""));
        assert_eq!(lookup(&config, "output.no_color").as_deref(), Some("false"));
    }

    #[test]
    fn configured_name_is_returned() {
        let mut config = AppConfig::default();
        config.render.module_name = Some("network".into());
        assert_eq!(lookup(&config, "render.module_name").as_deref(), Some("network"));
    }

    #[test]
    fn unknown_key() {
        assert_eq!(lookup(&AppConfig::default(), "does.not.exist"), None);
    }
}
