//! Function configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::AnalysisKind;

/// Configuration for the deployed analysis function
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Which analysis this deployment performs
    #[serde(default)]
    pub kind: AnalysisKind,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line (CloudWatch)
    #[default]
    Json,
    /// Human-readable output for local runs
    Pretty,
}

impl ServiceConfig {
    /// Validate function configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel);
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            kind: AnalysisKind::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,analysis_lambda=debug".to_string()
}
