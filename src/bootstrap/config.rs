//! # Configuration Loader
//!
//! Reads a TOML file into the [`AppConfig`] DTO. Pure loading only: no
//! validation and no defaults. Effective values are resolved in
//! [`super::settings`].

use anyhow::Context;
use std::path::PathBuf;

use cm_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// Missing sections and keys become empty values; they are facts, not
/// errors.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
