//! Boundary configuration via `handlebridge.toml`
//!
//! The host passes the path of a config file to `hb_initialize`; a missing
//! path means defaults. All fields are optional in the file.

use handlebridge_core::{BridgeError, Result};
use handlebridge_marshal::ZeroFill;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

/// Config file name looked up by hosts that keep it next to their data.
pub const CONFIG_FILE_NAME: &str = "handlebridge.toml";

/// Boundary configuration loaded from `handlebridge.toml`.
///
/// # Example
///
/// ```toml
/// log_level = "warn"
/// zero_fill = "capacity"
/// registry_capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Maximum tracing level: `"trace"`, `"debug"`, `"info"`, `"warn"` or `"error"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How much of a caller's text buffer is cleared before a fill.
    #[serde(default)]
    pub zero_fill: ZeroFill,
    /// Initial capacity of the context registry.
    #[serde(default = "default_registry_capacity")]
    pub registry_capacity: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_registry_capacity() -> usize {
    64
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            zero_fill: ZeroFill::default(),
            registry_capacity: default_registry_capacity(),
        }
    }
}

impl BridgeConfig {
    /// Parse the log level string into a `tracing::Level`.
    ///
    /// # Errors
    ///
    /// Returns a config error if the string is not a tracing level name.
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level).map_err(|_| {
            BridgeError::config(format!(
                "Invalid log_level '{}' in {}. Expected trace, debug, info, warn or error.",
                self.log_level, CONFIG_FILE_NAME
            ))
        })
    }

    /// Check every field that can hold an invalid value.
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# handlebridge configuration
#
# Maximum log level: "trace", "debug", "info", "warn" (default) or "error"
log_level = "warn"

# Zero-fill extent before text is copied into a caller buffer:
#   "capacity" = clear the whole declared capacity (default)
#   "required" = clear only the text and its terminator
zero_fill = "capacity"

# Initial capacity of the context registry
registry_capacity = 64
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BridgeConfig = toml::from_str(content)
            .map_err(|e| BridgeError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: BridgeConfig = toml::from_str(&content).map_err(|e| {
            BridgeError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                BridgeError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BridgeError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            BridgeError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
