//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key available for remote classification
    #[error("No Gemini API key configured. Run 'omnifile configure --api-key <KEY>', set GEMINI_API_KEY, or pass --offline")]
    MissingApiKey,

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] omnifile_llm::LlmError),

    /// Batch could not start or the worker failed
    #[error("{0}")]
    Organizer(#[from] omnifile_organizer::OrganizerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
