//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;
use std::path::Path;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (omnifile-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a free-form text completion for a single prompt
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Model identifier, for logs and reports
    fn model_name(&self) -> &str;
}

/// Trait for turning a document into a bounded text excerpt
///
/// Implemented by the infrastructure layer (omnifile-content). Implementations
/// never fail: an unreadable document yields an empty excerpt.
pub trait ContentSource {
    /// Extract a text excerpt from the file at `path`
    fn excerpt(&self, path: &Path) -> String;
}
