//! Input folder scanning

use omnifile_content::is_supported;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Supported files under `input`, recursively, sorted by path
///
/// When `exclude` names a folder inside `input` (an output folder nested in
/// the input), that subtree is skipped. Unreadable entries are logged and
/// skipped. Symlinks to files are listed; symlinked folders are not entered.
pub fn discover_files(input: &Path, exclude: Option<&Path>) -> Vec<PathBuf> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.file_type().is_dir()
                && excluded.is_some()
                && entry.path().canonicalize().ok() == excluded;
            if skip {
                debug!("Skipping output folder {}", entry.path().display());
            }
            !skip
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.path().is_file() && is_supported(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_recursive_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.pdf");
        touch(dir.path(), "a/z.TXT");
        touch(dir.path(), "a/notes.log");
        touch(dir.path(), "a/deep/c.docx");
        touch(dir.path(), "video.mp4");
        touch(dir.path(), "noext");

        let files = discover_files(dir.path(), None);
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(rel, vec!["a/deep/c.docx", "a/z.TXT", "b.pdf"]);
    }

    #[test]
    fn test_nested_output_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ata.pdf");
        touch(dir.path(), "organized/Outros_Documentos/old.pdf");

        let output = dir.path().join("organized");
        let files = discover_files(dir.path(), Some(&output));

        assert_eq!(files, vec![dir.path().join("ata.pdf")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_listed() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        touch(elsewhere.path(), "contrato.pdf");
        touch(elsewhere.path(), "sub/ata.pdf");

        std::os::unix::fs::symlink(
            elsewhere.path().join("contrato.pdf"),
            dir.path().join("contrato.pdf"),
        )
        .unwrap();
        std::os::unix::fs::symlink(elsewhere.path().join("sub"), dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.pdf"), dir.path().join("broken.pdf"))
            .unwrap();

        let files = discover_files(dir.path(), None);
        assert_eq!(files, vec![dir.path().join("contrato.pdf")]);
    }

    #[test]
    fn test_empty_folder() {
        let dir = TempDir::new().unwrap();
        assert!(discover_files(dir.path(), None).is_empty());
    }
}
