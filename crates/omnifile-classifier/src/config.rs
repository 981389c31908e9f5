//! Configuration for the Classifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Characters of content sent to the LLM
    pub content_limit: usize,

    /// Trimmed content must be longer than this for the remote path
    pub min_content_chars: usize,

    /// Maximum time for a single classification call (seconds)
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get the classification timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.content_limit == 0 {
            return Err("content_limit must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
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

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            content_limit: 2000,
            min_content_chars: 50,
            timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_content_limit() {
        let config = ClassifierConfig {
            content_limit: 0,
            ..ClassifierConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let config = ClassifierConfig {
            timeout_secs: 0,
            ..ClassifierConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClassifierConfig::from_toml("timeout_secs = 30").unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.content_limit, 2000);
        assert_eq!(config.min_content_chars, 50);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClassifierConfig {
            content_limit: 500,
            ..ClassifierConfig::default()
        };
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ClassifierConfig::from_toml(&toml_str).unwrap(), config);
    }
}
