//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! > **This module contains data only, no policy, no validation.**
//! > Effective values are resolved by the composition point.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clipboard sampling interval in milliseconds (0 means "not set")
    pub poll_interval_ms: u64,

    /// History file path (path info only, no existence check)
    pub history_path: PathBuf,

    /// Script time budget in milliseconds (0 means "not set")
    pub transform_timeout_ms: u64,

    /// User modifier script path (empty means "not set")
    pub script_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings and zeros are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            poll_interval_ms: toml_value
                .get("clipboard")
                .and_then(|c| c.get("poll_interval_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            history_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("history_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            transform_timeout_ms: toml_value
                .get("transform")
                .and_then(|t| t.get("timeout_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            script_path: PathBuf::from(
                toml_value
                    .get("transform")
                    .and_then(|t| t.get("script_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            poll_interval_ms: 0,
            history_path: PathBuf::new(),
            transform_timeout_ms: 0,
            script_path: PathBuf::new(),
        }
    }
}
