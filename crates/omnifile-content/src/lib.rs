//! Omnifile Content Extraction
//!
//! Produces a bounded plain-text excerpt from a document so it can be sent to the
//! classifier.
//!
//! # Supported formats
//!
//! | Kind | Extensions | Excerpt |
//! |------|------------|---------|
//! | PDF | `.pdf` | first 3 pages |
//! | Word processor | `.docx`, `.doc` | first 20 paragraphs |
//! | Plain text | `.txt .md .py .js .html .css .json .log` | first 3000 characters |
//! | Anything else | | empty |
//!
//! Extraction never fails from the caller's point of view: [`ContentExtractor::extract`]
//! returns an empty string when the document cannot be read. Use
//! [`ContentExtractor::try_extract`] to see the underlying error.
//!
//! # Example
//!
//! ```no_run
//! use omnifile_content::ContentExtractor;
//! use std::path::Path;
//!
//! let extractor = ContentExtractor::default();
//! let text = extractor.extract(Path::new("relatorio.pdf"));
//! println!("{} chars", text.chars().count());
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod kind;

pub use error::ContentError;
pub use extractor::{ContentExtractor, ExtractionLimits};
pub use kind::{is_supported, lowercase_extension, DocumentKind, SUPPORTED_EXTENSIONS};
