//! Configuration management for the CLI.

use crate::credentials::DEFAULT_CREDENTIALS_FILE;
use crate::error::{CliError, Result};
use omnifile_classifier::ClassifierConfig;
use omnifile_content::ExtractionLimits;
use omnifile_llm::GeminiConfig;
use omnifile_naming::NamingConfig;
use omnifile_organizer::OrganizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Credential file holding the Gemini API key
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Gemini connection
    #[serde(default)]
    pub llm: GeminiConfig,

    /// Remote classification
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Text extraction limits
    #[serde(default)]
    pub extraction: ExtractionLimits,

    /// Name validation rules
    #[serde(default)]
    pub naming: NamingConfig,

    /// Batch behaviour
    #[serde(default)]
    pub organizer: OrganizerConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".omnifile").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        let sections = [
            ("llm", self.llm.validate()),
            ("classifier", self.classifier.validate()),
            ("naming", self.naming.validate()),
        ];

        for (name, result) in sections {
            result.map_err(|e| CliError::Config(format!("[{}] {}", name, e)))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
            settings: Settings::default(),
            llm: GeminiConfig::default(),
            classifier: ClassifierConfig::default(),
            extraction: ExtractionLimits::default(),
            naming: NamingConfig::default(),
            organizer: OrganizerConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from(DEFAULT_CREDENTIALS_FILE)
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.credentials_file, PathBuf::from("organizer_config.json"));
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.classifier, ClassifierConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".omnifile/config.toml");

        let mut config = Config::default();
        config.llm.model = "gemini-1.5-pro".to_string();
        config.settings.format = OutputFormat::Json;
        config.organizer.dry_run = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.llm.model, "gemini-1.5-pro");
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert!(loaded.organizer.dry_run);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "credentials_file = \"/etc/omnifile/key.json\"\n\n[classifier]\ncontent_limit = 800\n\n[settings]\nformat = \"quiet\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.credentials_file, PathBuf::from("/etc/omnifile/key.json"));
        assert_eq!(config.classifier.content_limit, 800);
        assert_eq!(config.classifier.timeout_secs, 120);
        assert_eq!(config.settings.format, OutputFormat::Quiet);
        assert!(config.settings.color);
    }

    #[test]
    fn test_invalid_section_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[llm]\nmodel = \"\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("[llm]"));
    }
}
