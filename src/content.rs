/*!
 * Content classification and comment-style annotation
 *
 * The classifier decides whether a byte buffer is binary or text; the
 * annotator maps a file path's extension to the comment prefix used
 * for its header line in the aggregated output.
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// How many leading bytes the control-character check examines
const SNIFF_LEN: usize = 512;

/// Extensions whose header comment is `//`
static SLASH_COMMENT_EXTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        ".go", ".java", ".js", ".cpp", ".c", ".h", ".cs", ".kt", ".swift",
    ])
});

/// Extensions whose header comment is `#`; the empty string covers
/// files with no extension
static HASH_COMMENT_EXTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        ".py", ".rb", ".pl", ".sh", ".bash", ".yml", ".yaml", ".conf", ".txt", ".md", "",
    ])
});

/// Decide whether a byte buffer holds binary content.
///
/// A zero byte anywhere in the buffer means binary. Otherwise the
/// first 512 bytes are checked for control characters below 0x20 other
/// than newline, carriage return, and tab. This is a heuristic: a
/// binary file whose leading bytes look textual passes, and text using
/// uncommon control characters is rejected. Total over any input; the
/// empty buffer is text.
pub fn is_binary(content: &[u8]) -> bool {
    if content.contains(&0) {
        return true;
    }

    content[..content.len().min(SNIFF_LEN)]
        .iter()
        .any(|&b| b < 32 && b != b'\n' && b != b'\r' && b != b'\t')
}

/// Return the header comment prefix for a file path.
///
/// The extension is matched case-insensitively, including the leading
/// dot. Unknown extensions default to `//`; only the extensions in the
/// hash set (and extension-less files) get `#`.
pub fn comment_prefix(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    if SLASH_COMMENT_EXTS.contains(ext.as_str()) {
        return "//";
    }
    if HASH_COMMENT_EXTS.contains(ext.as_str()) {
        return "#";
    }
    "//"
}
