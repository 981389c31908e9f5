//! Destination naming and copying

use filetime::FileTime;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lowest free file name for `stem` + `ext`
///
/// Tries `<stem><ext>`, then `<stem> (1)<ext>`, `<stem> (2)<ext>` and so on,
/// returning the first candidate for which `is_taken` is false. Not atomic
/// with respect to other processes writing the same folder.
pub fn next_free_name(stem: &str, ext: &str, mut is_taken: impl FnMut(&str) -> bool) -> String {
    let first = format!("{}{}", stem, ext);
    if !is_taken(&first) {
        return first;
    }

    let mut counter = 1u64;
    loop {
        let candidate = format!("{} ({}){}", stem, counter, ext);
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Lowest free path for `stem` + `ext` inside `dir`
pub fn resolve_collision(dir: &Path, stem: &str, ext: &str) -> io::Result<PathBuf> {
    resolve_collision_excluding(dir, stem, ext, &HashSet::new())
}

/// Like [`resolve_collision`], also treating `reserved` paths as taken
pub fn resolve_collision_excluding(
    dir: &Path,
    stem: &str,
    ext: &str,
    reserved: &HashSet<PathBuf>,
) -> io::Result<PathBuf> {
    let mut failure = None;

    let name = next_free_name(stem, ext, |candidate| {
        let path = dir.join(candidate);
        if reserved.contains(&path) {
            return true;
        }
        path.try_exists().unwrap_or_else(|e| {
            failure = Some(e);
            false
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(dir.join(name)),
    }
}

/// Copy `source` to `destination`, creating parent folders
///
/// The source is never modified. With `preserve_timestamps` the copy gets
/// the source's modification time. If anything fails after the bytes are
/// written, the partial copy is removed.
pub fn copy_file(source: &Path, destination: &Path, preserve_timestamps: bool) -> io::Result<u64> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(source, destination)?;

    if preserve_timestamps {
        if let Err(e) = copy_mtime(source, destination) {
            let _ = fs::remove_file(destination);
            return Err(e);
        }
    }

    Ok(bytes)
}

/// Set by path, so a read-only copy can still be stamped
fn copy_mtime(source: &Path, destination: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;
    filetime::set_file_mtime(destination, FileTime::from_last_modification_time(&metadata))
}
