//! Filename sanitization

use omnifile_domain::MAX_NAME_CHARS;

/// Characters that are not allowed in a file name on common filesystems
pub const INVALID_CHARS: &str = "<>:\"/\\|?*";

/// Name used when nothing survives sanitization
pub const DEFAULT_NAME: &str = "Documento";

/// Make a proposed name safe to use as a file name (without extension)
///
/// Illegal characters and control characters become spaces, whitespace runs
/// collapse to one space, the result is trimmed and capped at
/// [`MAX_NAME_CHARS`] characters. An empty result becomes [`DEFAULT_NAME`].
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if INVALID_CHARS.contains(c) || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_NAME_CHARS).collect();
    let truncated = truncated.trim_end();

    if truncated.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        truncated.to_string()
    }
}
