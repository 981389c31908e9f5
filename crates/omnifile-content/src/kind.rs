//! Document kinds and the extension allow-list

use std::path::Path;

/// Extensions picked up when scanning an input folder
pub const SUPPORTED_EXTENSIONS: [&str; 16] = [
    ".pdf", ".docx", ".doc", ".txt", ".md", ".py", ".js", ".html", ".css", ".json", ".xml",
    ".csv", ".xlsx", ".xls", ".jpg", ".png",
];

const PLAIN_TEXT_EXTENSIONS: [&str; 8] = [
    ".txt", ".md", ".py", ".js", ".html", ".css", ".json", ".log",
];

/// How the text of a document is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF, read page by page
    Pdf,

    /// Word-processor document, read paragraph by paragraph
    WordProcessor,

    /// Text-like file, read as leniently decoded UTF-8
    PlainText,

    /// No text is extracted
    Unsupported,
}

impl DocumentKind {
    /// Classify a path by its extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = lowercase_extension(path) else {
            return DocumentKind::Unsupported;
        };

        match ext.as_str() {
            ".pdf" => DocumentKind::Pdf,
            ".docx" | ".doc" => DocumentKind::WordProcessor,
            e if PLAIN_TEXT_EXTENSIONS.contains(&e) => DocumentKind::PlainText,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Lower-cased extension including the leading dot, e.g. `".pdf"`
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// Whether the file at `path` is on the scan allow-list
pub fn is_supported(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_by_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a.pdf")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::from_path(Path::new("a.docx")),
            DocumentKind::WordProcessor
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("a.doc")),
            DocumentKind::WordProcessor
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("notes.md")),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("server.log")),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("sheet.xlsx")),
            DocumentKind::Unsupported
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("README")),
            DocumentKind::Unsupported
        );
    }

    #[test]
    fn test_allow_list() {
        assert_eq!(SUPPORTED_EXTENSIONS.len(), 16);
        assert!(is_supported(Path::new("dir/photo.JPG")));
        assert!(is_supported(Path::new("table.csv")));
        // Extracted when present, but not scanned
        assert!(!is_supported(Path::new("server.log")));
        assert!(!is_supported(Path::new("archive.zip")));
        assert!(!is_supported(Path::new("Makefile")));
    }

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(
            lowercase_extension(Path::new("Oficio.DocX")),
            Some(".docx".to_string())
        );
        assert_eq!(lowercase_extension(Path::new("noext")), None);
    }
}
