//! Error types for the Classifier

use thiserror::Error;

/// Errors from the remote classification path
///
/// None of these reach the pipeline: the classifier answers every error with
/// the keyword fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// No provider configured
    #[error("No LLM provider configured")]
    NoProvider,

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Provider answered with nothing usable
    #[error("Empty response from LLM")]
    EmptyResponse,

    /// Provider call exceeded the configured timeout
    #[error("Classification timeout after {0}s")]
    Timeout(u64),
}
