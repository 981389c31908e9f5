//! Classification result - the outcome of analysing one document

use crate::Category;

/// Maximum length of a proposed name, in characters
pub const MAX_NAME_CHARS: usize = 70;

/// Which path produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationSource {
    /// Category and name were proposed by the remote LLM
    Remote,

    /// Deterministic keyword fallback
    Fallback,
}

impl ClassificationSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationSource::Remote => "remote",
            ClassificationSource::Fallback => "fallback",
        }
    }
}

/// Category and proposed name for a single document
///
/// Produced once per file and never modified afterwards. The name is capped at
/// [`MAX_NAME_CHARS`] characters on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    category: Category,
    name: String,
    source: ClassificationSource,
}

impl ClassificationResult {
    /// Create a new result, truncating the name to [`MAX_NAME_CHARS`] characters
    pub fn new(category: Category, name: impl Into<String>, source: ClassificationSource) -> Self {
        let name: String = name.into();
        let name = match name.char_indices().nth(MAX_NAME_CHARS) {
            Some((cut, _)) => name[..cut].to_string(),
            None => name,
        };

        Self {
            category,
            name,
            source,
        }
    }

    /// Destination category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Proposed name, without extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path that produced this result
    pub fn source(&self) -> ClassificationSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_keeps_short_names() {
        let result = ClassificationResult::new(
            Category::ContratosEAcordos,
            "Contrato Fornecimento João Silva",
            ClassificationSource::Remote,
        );
        assert_eq!(result.category(), Category::ContratosEAcordos);
        assert_eq!(result.name(), "Contrato Fornecimento João Silva");
        assert_eq!(result.source(), ClassificationSource::Remote);
    }

    #[test]
    fn test_result_truncates_on_char_boundary() {
        let long = "ç".repeat(100);
        let result = ClassificationResult::new(
            Category::OutrosDocumentos,
            long,
            ClassificationSource::Fallback,
        );
        assert_eq!(result.name().chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_source_names() {
        assert_eq!(ClassificationSource::Remote.as_str(), "remote");
        assert_eq!(ClassificationSource::Fallback.as_str(), "fallback");
    }
}
