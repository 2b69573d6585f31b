/*!
 * Batch-mode inclusion filter
 *
 * Evaluated per file before any bytes are read: an extension
 * allow-list and a directory exclude-list, both configured as
 * comma-separated values on the command line.
 */

use std::path::Path;

/// File inclusion predicate for batch mode
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Allowed extensions, lowercase, without leading dot. Empty means
    /// every extension is allowed.
    extensions: Vec<String>,
    /// Directory exclusion tokens. A file is excluded when its
    /// containing directory string contains any token as a substring,
    /// so a token like "test" also excludes "latest_build/". Kept
    /// deliberately permissive.
    exclude_dirs: Vec<String>,
}

impl FileFilter {
    /// Build a filter from raw configuration tokens.
    ///
    /// Tokens are trimmed, extensions lowercased and stripped of a
    /// leading dot; empty tokens are dropped rather than rejected.
    pub fn new(extensions: &[String], exclude_dirs: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
            exclude_dirs: exclude_dirs
                .iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Decide whether a file path qualifies for aggregation
    pub fn includes(&self, path: &Path) -> bool {
        if !self.extensions.is_empty() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !self.extensions.iter().any(|e| *e == ext) {
                return false;
            }
        }

        if !self.exclude_dirs.is_empty() {
            let dir = path
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default();
            if self.exclude_dirs.iter().any(|d| dir.contains(d.as_str())) {
                return false;
            }
        }

        true
    }
}
