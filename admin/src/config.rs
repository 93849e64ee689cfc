//! Configuration management for the Duka admin client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DUKA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Admin API configuration
    pub api: ApiConfig,

    /// UI configuration
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the admin API
    pub base_url: String,

    /// Bearer session token, when already authenticated
    pub session_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Display language code ("en" or "sw")
    pub language: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("DUKA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:3000")?
            .set_default("ui.language", "en")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DUKA_ prefix)
            .add_source(
                Environment::with_prefix("DUKA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Display language parsed from the configured code
    pub fn language(&self) -> shared::Language {
        match self.ui.language.as_str() {
            "sw" => shared::Language::Swahili,
            _ => shared::Language::English,
        }
    }
}
