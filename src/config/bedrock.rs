//! Bedrock inference configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Bedrock inference configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BedrockConfig {
    /// Model identifier passed to `InvokeModel`
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Region hosting the model; falls back to the SDK's region chain
    #[serde(default)]
    pub region: Option<String>,
}

impl BedrockConfig {
    /// Region to use when neither the config nor the environment names one
    pub const FALLBACK_REGION: &'static str = "eu-central-1";

    /// Validate Bedrock configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("BEDROCK_MODEL_ID"));
        }
        if self.region.as_ref().is_some_and(|r| r.trim().is_empty()) {
            return Err(ValidationError::InvalidRegion);
        }
        Ok(())
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            region: None,
        }
    }
}

fn default_model_id() -> String {
    "eu.anthropic.claude-3-7-sonnet-20250219-v1:0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedrock_config_defaults() {
        let config = BedrockConfig::default();
        assert_eq!(config.model_id, "eu.anthropic.claude-3-7-sonnet-20250219-v1:0");
        assert!(config.region.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_model_id() {
        let config = BedrockConfig {
            model_id: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_region() {
        let config = BedrockConfig {
            region: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
