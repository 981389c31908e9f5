//! Error types for content extraction

use thiserror::Error;

/// Errors that can occur while reading a document
#[derive(Error, Debug)]
pub enum ContentError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF could not be parsed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Word document could not be parsed
    #[error("DOCX error: {0}")]
    Docx(String),
}
