//! `wayfind config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key such as `format.ignore_path`.
///
/// Strings print bare; everything else prints as a TOML value.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let tree = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let mut node = &tree;
    for part in key.split('.') {
        node = node
            .get(part)
            .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })?;
    }

    Ok(match node {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "format.ignore_path").unwrap(),
            ".prettierignore"
        );
    }

    #[test]
    fn get_boolean_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_list_key() {
        let mut cfg = AppConfig::default();
        cfg.plugins.php.command = vec!["php-cs".into(), "{file}".into()];
        let value = get_config_value(&cfg, "plugins.php.command").unwrap();
        assert!(value.contains("php-cs"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn list_renders_every_section() {
        let rendered = to_toml(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[output]"));
        assert!(rendered.contains("[format]"));
        assert!(rendered.contains("php"));
    }
}
