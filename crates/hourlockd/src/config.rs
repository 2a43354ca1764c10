//! Configuration management for hourlockd.

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

use hourlock_common::constants::{
    DEFAULT_KEY_LENGTH, DEFAULT_LISTEN_ADDR, MAX_KEY_LENGTH, MIN_KEY_LENGTH,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Key length in decimal digits, shared by key generation, proof
    /// derivation, and rounding. Must match on every caller or the protocol
    /// cannot succeed.
    #[serde(default = "default_key_length")]
    pub key_length: u32,

    /// Allowed CORS origins. Empty list allows any origin (development).
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}
fn default_key_length() -> u32 {
    DEFAULT_KEY_LENGTH
}

impl AppConfig {
    /// Load configuration from file, with CLI overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config: Self = if Path::new(config_path).exists() {
            let settings = config::Config::builder()
                .add_source(config::File::with_name(config_path))
                .build()
                .context("Failed to load config file")?;

            settings
                .try_deserialize()
                .context("Failed to parse config")?
        } else {
            // Use defaults if config file doesn't exist
            tracing::warn!("Config file not found, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(key_length) = args.key_length {
            config.key_length = key_length;
        }

        ensure!(
            (MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&config.key_length),
            "key_length must be between {MIN_KEY_LENGTH} and {MAX_KEY_LENGTH}, got {}",
            config.key_length
        );

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            key_length: default_key_length(),
            allowed_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_CONFIG: &str = "/nonexistent/hourlockd.toml";

    fn args_with_key_length(key_length: Option<u32>) -> crate::Args {
        crate::Args {
            config: MISSING_CONFIG.to_string(),
            listen: None,
            key_length,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    #[test]
    fn test_defaults_when_config_missing() {
        let config = AppConfig::load(MISSING_CONFIG, &args_with_key_length(None)).unwrap();
        assert_eq!(config.key_length, DEFAULT_KEY_LENGTH);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_key_length_accepted_at_bounds() {
        for len in [MIN_KEY_LENGTH, MAX_KEY_LENGTH] {
            let config =
                AppConfig::load(MISSING_CONFIG, &args_with_key_length(Some(len))).unwrap();
            assert_eq!(config.key_length, len);
        }
    }

    #[test]
    fn test_key_length_rejected_out_of_bounds() {
        for len in [MIN_KEY_LENGTH - 1, MAX_KEY_LENGTH + 1] {
            let result = AppConfig::load(MISSING_CONFIG, &args_with_key_length(Some(len)));
            assert!(result.is_err(), "key_length {len} should be rejected");
        }
    }
}
