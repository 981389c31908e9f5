//! Naming configuration

use serde::{Deserialize, Serialize};

/// Configuration for name validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Words that make a proposed name generic when they appear anywhere in it
    pub generic_words: Vec<String>,

    /// Names that the category step treats as placeholders (exact, case-insensitive)
    pub placeholder_names: Vec<String>,

    /// Minimum non-whitespace characters for a proposed name
    pub min_name_chars: usize,

    /// A fallback name shorter than this is rebuilt from the category prefix
    pub min_fallback_name_chars: usize,

    /// A cleaned stem must be longer than this to be used in a replacement name
    pub min_clean_stem_chars: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect();

        Self {
            generic_words: words(&[
                "documento",
                "arquivo",
                "file",
                "doc",
                "pdf",
                "texto",
                "untitled",
                "sem titulo",
                "novo",
                "copia",
                "copy",
            ]),
            placeholder_names: words(&["documento", "arquivo", "file"]),
            min_name_chars: 3,
            min_fallback_name_chars: 5,
            min_clean_stem_chars: 5,
        }
    }
}

impl NamingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_name_chars == 0 {
            return Err("min_name_chars must be greater than 0".to_string());
        }
        if self.generic_words.iter().any(|w| w.trim().is_empty()) {
            return Err("generic_words must not contain blank entries".to_string());
        }
        if self.generic_words.iter().any(|w| w.to_lowercase() != *w) {
            return Err("generic_words must be lower-case".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NamingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generic_words.len(), 11);
        assert_eq!(config.min_name_chars, 3);
    }

    #[test]
    fn test_blank_generic_word_is_invalid() {
        let mut config = NamingConfig::default();
        config.generic_words.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uppercase_generic_word_is_invalid() {
        let mut config = NamingConfig::default();
        config.generic_words.push("Rascunho".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_min_chars_is_invalid() {
        let config = NamingConfig {
            min_name_chars: 0,
            ..NamingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
