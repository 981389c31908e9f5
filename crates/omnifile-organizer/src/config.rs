//! Configuration for batch organization

use serde::{Deserialize, Serialize};

/// Configuration for the Organizer
///
/// # Examples
///
/// ```
/// use omnifile_organizer::OrganizerConfig;
///
/// let config = OrganizerConfig::from_toml("dry_run = true").unwrap();
/// assert!(config.dry_run);
/// assert!(config.preserve_timestamps);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    /// Resolve destinations without creating folders or copying
    pub dry_run: bool,

    /// Give each copy the modification time of its source
    pub preserve_timestamps: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            preserve_timestamps: true,
        }
    }
}

impl OrganizerConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrganizerConfig::default();
        assert!(!config.dry_run);
        assert!(config.preserve_timestamps);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = OrganizerConfig {
            dry_run: true,
            preserve_timestamps: false,
        };
        let parsed = OrganizerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
