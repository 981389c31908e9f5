//! Word document extraction against real .docx files built with docx-rs

use docx_rs::{Docx, Paragraph, Run};
use omnifile_content::{ContentExtractor, ExtractionLimits};
use std::fs::File;
use tempfile::TempDir;

fn build_docx(dir: &TempDir, name: &str, paragraphs: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    let file = File::create(&path).unwrap();
    docx.build().pack(file).unwrap();
    path
}

#[test]
fn test_docx_paragraphs_are_joined_by_newlines() {
    let dir = TempDir::new().unwrap();
    let path = build_docx(
        &dir,
        "oficio.docx",
        &["Ofício nº 12/2024", "Assunto: Solicitação de informações"],
    );

    let text = ContentExtractor::default().try_extract(&path).unwrap();
    assert_eq!(
        text,
        "Ofício nº 12/2024\nAssunto: Solicitação de informações\n"
    );
}

#[test]
fn test_docx_paragraph_limit() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=30).map(|i| format!("Parágrafo {}", i)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = build_docx(&dir, "longo.docx", &refs);

    let text = ContentExtractor::default().extract(&path);
    assert_eq!(text.lines().count(), 20);
    assert!(text.contains("Parágrafo 20"));
    assert!(!text.contains("Parágrafo 21"));

    let extractor = ContentExtractor::new(ExtractionLimits {
        docx_paragraphs: 2,
        ..ExtractionLimits::default()
    });
    assert_eq!(extractor.extract(&path), "Parágrafo 1\nParágrafo 2\n");
}

#[test]
fn test_docx_extension_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = build_docx(&dir, "CONTRATO.DOCX", &["Contrato de prestação"]);

    assert_eq!(
        ContentExtractor::default().extract(&path),
        "Contrato de prestação\n"
    );
}
