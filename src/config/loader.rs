//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Section name accepted for configs embedded in a larger file.
const CONFIG_SECTION: &str = "dart-merge";

/// Load settings from an explicit config file.
///
/// Without a path the defaults are returned; there is no auto-discovery, so a
/// plain run never picks up stray files from the working directory.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(config_file) = config_path else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let config = match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file)?,
        "yaml" | "yml" => parse_yaml_config(&content, config_file)?,
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    tracing::debug!("loaded config from {}: {:?}", config_file.display(), config);
    Ok(config)
}

/// Parse TOML config, supporting a nested `[dart-merge]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `dart-merge:` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(CONFIG_SECTION) {
        Some(nested) => nested.clone(),
        None if raw.is_null() => return Ok(Config::default()),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}
