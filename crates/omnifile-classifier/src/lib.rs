//! Omnifile Classifier
//!
//! Decides the category and proposed name of a document.
//!
//! # Overview
//!
//! Classification has two paths. When an LLM provider is configured and the
//! extracted content is substantial, the provider is asked for a category and
//! a descriptive name. Otherwise, or when the remote call fails in any way,
//! a deterministic keyword classifier works from the filename alone.
//!
//! # Architecture
//!
//! ```text
//! Content ─┬─ (provider, > 50 chars) → Prompt → LLM → Parser → NameValidator
//!          └─ (otherwise / on error) → KeywordClassifier → improve_by_category
//! ```
//!
//! # Example Usage
//!
//! ```
//! use omnifile_classifier::{Classifier, ClassifierConfig};
//! use omnifile_domain::{Category, ClassificationSource};
//! use omnifile_llm::MockProvider;
//! use omnifile_naming::NameValidator;
//!
//! # tokio_test::block_on(async {
//! let llm = MockProvider::new("CATEGORY: Contratos_e_Acordos\nNAME: Contrato Fornecimento João Silva");
//! let classifier = Classifier::new(Some(llm), ClassifierConfig::default(), NameValidator::default());
//!
//! let content = "CONTRATO DE FORNECIMENTO celebrado entre a Prefeitura e João Silva ...";
//! let result = classifier.classify("scan_0042.pdf", content).await;
//!
//! assert_eq!(result.category(), Category::ContratosEAcordos);
//! assert_eq!(result.name(), "Contrato Fornecimento João Silva");
//! assert_eq!(result.source(), ClassificationSource::Remote);
//! # });
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod fallback;
mod keyword;
mod parser;
mod prompt;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use fallback::fallback_analysis;
pub use keyword::KeywordClassifier;
pub use parser::{parse_response, ParsedResponse};
pub use prompt::PromptBuilder;
