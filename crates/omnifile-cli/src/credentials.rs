//! Gemini API key storage.
//!
//! The key lives in a small JSON file, `{"api_key": "..."}`, next to where
//! the tool is run. The `GEMINI_API_KEY` environment variable takes
//! precedence over the file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the stored key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default credential file name.
pub const DEFAULT_CREDENTIALS_FILE: &str = "organizer_config.json";

/// Stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Gemini API key
    pub api_key: String,
}

impl Credentials {
    /// Load credentials; a missing file or a blank key yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let credentials: Credentials = serde_json::from_str(&contents)?;
        if credentials.api_key.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(credentials))
    }

    /// Save credentials, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Key with everything but the last four characters hidden.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        let visible = chars.len().saturating_sub(4);
        let tail: String = chars[visible..].iter().collect();
        format!("{}{}", "*".repeat(visible.min(12)), tail)
    }
}

/// API key from `env_value` if set and non-blank, else from the file at `path`.
pub fn resolve_api_key(path: &Path, env_value: Option<String>) -> Result<Option<String>> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        return Ok(Some(key.trim().to_string()));
    }
    Ok(Credentials::load(path)?.map(|c| c.api_key.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/organizer_config.json");

        let credentials = Credentials {
            api_key: "AIza-test-key".to_string(),
        };
        credentials.save(&path).unwrap();

        assert_eq!(Credentials::load(&path).unwrap(), Some(credentials));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"api_key\""));
    }

    #[test]
    fn test_missing_or_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("organizer_config.json");
        assert_eq!(Credentials::load(&path).unwrap(), None);

        fs::write(&path, r#"{"api_key": "   "}"#).unwrap();
        assert_eq!(Credentials::load(&path).unwrap(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("organizer_config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Credentials::load(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("organizer_config.json");
        Credentials {
            api_key: "from-file".to_string(),
        }
        .save(&path)
        .unwrap();

        assert_eq!(
            resolve_api_key(&path, Some("from-env".to_string())).unwrap(),
            Some("from-env".to_string())
        );
        assert_eq!(
            resolve_api_key(&path, Some(" ".to_string())).unwrap(),
            Some("from-file".to_string())
        );
        assert_eq!(
            resolve_api_key(&dir.path().join("none.json"), None).unwrap(),
            None
        );
    }

    #[test]
    fn test_masked() {
        let credentials = Credentials {
            api_key: "abcdefgh1234".to_string(),
        };
        assert_eq!(credentials.masked(), "********1234");

        let short = Credentials {
            api_key: "abc".to_string(),
        };
        assert_eq!(short.masked(), "abc");
    }
}
