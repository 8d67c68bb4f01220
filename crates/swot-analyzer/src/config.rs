//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum characters across the four input blocks
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Upper bound for the service call (seconds); none means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Reject responses that break a conformance rule instead of repairing them
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

fn default_max_input_chars() -> usize {
    20_000
}

fn default_strict_validation() -> bool {
    true
}

impl AnalyzerConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    /// Strict validation, no timeout, 20k characters of input
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            request_timeout_secs: None,
            strict_validation: default_strict_validation(),
        }
    }
}

impl AnalyzerConfig {
    /// Lenient preset: repairs illogical suggestions instead of failing, larger input
    pub fn lenient() -> Self {
        Self {
            max_input_chars: 50_000,
            request_timeout_secs: None,
            strict_validation: false,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
