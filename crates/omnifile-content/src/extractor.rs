//! Text excerpt extraction per document kind

use crate::error::ContentError;
use crate::kind::DocumentKind;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use omnifile_domain::traits::ContentSource;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// How much of each document kind ends up in the excerpt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionLimits {
    /// Leading PDF pages to read
    pub pdf_pages: usize,

    /// Leading Word paragraphs to read
    pub docx_paragraphs: usize,

    /// Leading characters of a text file to read
    pub text_chars: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            pdf_pages: 3,
            docx_paragraphs: 20,
            text_chars: 3000,
        }
    }
}

/// Reads bounded excerpts from documents
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor {
    limits: ExtractionLimits,
}

impl ContentExtractor {
    /// Create an extractor with custom limits
    pub fn new(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    /// Active limits
    pub fn limits(&self) -> ExtractionLimits {
        self.limits
    }

    /// Extract an excerpt, returning an empty string on any failure
    pub fn extract(&self, path: &Path) -> String {
        match self.try_extract(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("Extraction failed for {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Extract an excerpt, surfacing the error
    pub fn try_extract(&self, path: &Path) -> Result<String, ContentError> {
        match DocumentKind::from_path(path) {
            DocumentKind::Pdf => self.extract_pdf(path),
            DocumentKind::WordProcessor => self.extract_docx(path),
            DocumentKind::PlainText => self.extract_text(path),
            DocumentKind::Unsupported => Ok(String::new()),
        }
    }

    fn extract_pdf(&self, path: &Path) -> Result<String, ContentError> {
        let doc = lopdf::Document::load(path).map_err(|e| ContentError::Pdf(e.to_string()))?;

        let mut text = String::new();
        for page in doc.get_pages().into_keys().take(self.limits.pdf_pages) {
            let page_text = doc
                .extract_text(&[page])
                .map_err(|e| ContentError::Pdf(format!("page {}: {}", page, e)))?;
            text.push_str(&page_text);
            text.push('\n');
        }

        Ok(text)
    }

    fn extract_docx(&self, path: &Path) -> Result<String, ContentError> {
        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| ContentError::Docx(e.to_string()))?;

        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p),
                _ => None,
            })
            .take(self.limits.docx_paragraphs);

        let mut text = String::new();
        for paragraph in paragraphs {
            for child in &paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }

        Ok(text)
    }

    fn extract_text(&self, path: &Path) -> Result<String, ContentError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(read_lenient(reader, self.limits.text_chars)?)
    }
}

impl ContentSource for ContentExtractor {
    fn excerpt(&self, path: &Path) -> String {
        self.extract(path)
    }
}

/// Decode up to `limit` chars of UTF-8 from `reader`, silently dropping
/// invalid byte sequences
///
/// Reading stops once `limit` valid chars are collected, however many
/// invalid bytes precede them.
fn read_lenient(mut reader: impl Read, limit: usize) -> io::Result<String> {
    let mut text = String::new();
    let mut taken = 0;
    let mut pending: Vec<u8> = Vec::new();
    let mut buf = [0u8; 8192];

    while taken < limit {
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let at_eof = n == 0;
        pending.extend_from_slice(&buf[..n]);

        let mut consumed = 0;
        for chunk in pending.utf8_chunks() {
            for c in chunk.valid().chars().take(limit - taken) {
                text.push(c);
                taken += 1;
            }
            consumed += chunk.valid().len();

            // A sequence cut by the end of the buffer may complete on the next read
            let invalid = chunk.invalid();
            if !at_eof && consumed + invalid.len() == pending.len() && invalid.len() < 4 {
                break;
            }
            consumed += invalid.len();
        }
        pending.drain(..consumed);

        if at_eof {
            break;
        }
    }

    Ok(text)
}
