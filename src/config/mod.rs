//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Each section reads its own prefix so
//! the variable names match what the deployment templates already set:
//!
//! - `BEDROCK_MODEL_ID`, `BEDROCK_REGION` -> [`BedrockConfig`]
//! - `ANALYSIS_KIND`, `ANALYSIS_LOG_LEVEL`, `ANALYSIS_LOG_FORMAT` -> [`ServiceConfig`]
//!
//! # Example
//!
//! ```no_run
//! use analysis_lambda::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving {} with {}", config.service.kind, config.bedrock.model_id);
//! ```

mod bedrock;
mod error;
mod service;

pub use bedrock::BedrockConfig;
pub use error::{ConfigError, ValidationError};
pub use service::{LogFormat, ServiceConfig};

use serde::de::DeserializeOwned;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Bedrock inference configuration (model, region)
    pub bedrock: BedrockConfig,

    /// Function configuration (analysis kind, logging)
    pub service: ServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `BEDROCK_*` variables into the Bedrock section
    /// 3. Reads `ANALYSIS_*` variables into the service section
    ///
    /// Every value has a default, so an empty environment loads successfully.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Ok(Self {
            bedrock: load_section("BEDROCK")?,
            service: load_section("ANALYSIS")?,
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bedrock.validate()?;
        self.service.validate()?;
        Ok(())
    }
}

fn load_section<T: DeserializeOwned>(prefix: &str) -> Result<T, ConfigError> {
    let section = config::Config::builder()
        .add_source(config::Environment::with_prefix(prefix))
        .build()?
        .try_deserialize()?;

    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AnalysisKind;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BEDROCK_MODEL_ID",
        "BEDROCK_REGION",
        "ANALYSIS_KIND",
        "ANALYSIS_LOG_LEVEL",
        "ANALYSIS_LOG_FORMAT",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.bedrock.model_id,
            "eu.anthropic.claude-3-7-sonnet-20250219-v1:0"
        );
        assert!(config.bedrock.region.is_none());
        assert_eq!(config.service.kind, AnalysisKind::Document);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BEDROCK_MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0");
        env::set_var("BEDROCK_REGION", "eu-west-1");
        env::set_var("ANALYSIS_KIND", "compliance");
        env::set_var("ANALYSIS_LOG_FORMAT", "pretty");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.bedrock.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(config.bedrock.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.service.kind, AnalysisKind::Compliance);
        assert_eq!(config.service.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ANALYSIS_KIND", "Risk");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().service.kind, AnalysisKind::Risk);
    }

    #[test]
    fn test_unknown_kind_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ANALYSIS_KIND", "forecast");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_model_id() {
        let config = AppConfig {
            bedrock: BedrockConfig {
                model_id: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
