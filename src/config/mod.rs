//! Configuration for SmartFit: config.toml sections, environment lookups and
//! database setup.

/// Database configuration and connection management
pub mod database;

/// Tier limits and storage settings from config.toml
pub mod limits;

use crate::errors::{Error, Result};
use limits::{StorageConfig, TierLimits};
use serde::Deserialize;
use std::path::Path;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Free/premium numeric limits
    pub limits: TierLimits,
    /// Key-value storage settings
    pub storage: StorageConfig,
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the application configuration.
///
/// The path comes from `SMARTFIT_CONFIG`, falling back to `./config.toml`.
/// A missing file is not an error: the built-in defaults are used instead.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("SMARTFIT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if !Path::new(&path).exists() {
        tracing::info!("No config file at {path}, using default limits");
        return Ok(AppConfig::default());
    }

    let config = load_config(&path)?;
    tracing::info!(
        "Loaded configuration from {path} (free item limit {}, free daily outfits {})",
        config.limits.free_item_limit,
        config.limits.free_daily_outfits
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            [limits]
            free_item_limit = 30
            free_outfits_per_call = 2

            [storage]
            key_prefix = "wardrobe"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.limits.free_item_limit, 30);
        assert_eq!(config.limits.free_outfits_per_call, 2);
        assert_eq!(config.limits.premium_outfits_per_call, 10);
        assert_eq!(config.storage.key_prefix, "wardrobe");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
