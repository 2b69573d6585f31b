/*!
 * Aggregation of qualifying files into one annotated output stream
 */

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};

use crate::content::{comment_prefix, is_binary};
use crate::report::FileReportInfo;
use crate::types::{Node, Tree};
use crate::utils::format_file_size;

/// Statistics collected over one aggregation run
#[derive(Debug, Clone, Default)]
pub struct AggregateStats {
    /// Number of files whose content was emitted
    pub files_emitted: usize,
    /// Files skipped because the classifier flagged them as binary
    pub binaries_skipped: usize,
    /// Files skipped by the size gate
    pub oversized_skipped: usize,
    /// Files that failed to read and produced an inline diagnostic
    pub read_errors: usize,
    /// Total bytes written to the output
    pub bytes_written: usize,
    /// Per-file line and character counts, keyed by path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Aggregator for qualifying files in a tree.
///
/// Traverses the tree depth-first in pre-order, children in stored
/// order, and emits one annotated block per qualifying text file: a
/// `<prefix> <path>` header line, the raw file bytes unmodified, and a
/// blank separator line. Output is byte-deterministic for a fixed tree
/// and qualification function.
pub struct Aggregator {
    /// Files larger than this are skipped with a stderr notice instead
    /// of being read; `None` disables the gate (interactive mode)
    max_file_size: Option<u64>,
}

impl Aggregator {
    /// Create an aggregator without a size gate
    pub fn new() -> Self {
        Self {
            max_file_size: None,
        }
    }

    /// Create an aggregator that skips files larger than `limit` bytes
    pub fn with_max_file_size(limit: u64) -> Self {
        Self {
            max_file_size: Some(limit),
        }
    }

    /// Run the aggregation, writing blocks to `out` as they are
    /// produced.
    ///
    /// A file that fails to read gets an inline `Error reading ...`
    /// diagnostic in the output and the traversal continues; only a
    /// failure to write to `out` itself aborts the run.
    pub fn run<W, F>(&self, tree: &Tree, qualifies: F, out: &mut W) -> io::Result<AggregateStats>
    where
        W: Write,
        F: Fn(&Node) -> bool,
    {
        let mut stats = AggregateStats::default();

        for id in tree.walk() {
            let node = tree.node(id);
            if node.is_dir || !qualifies(node) {
                continue;
            }
            self.emit_file(node, out, &mut stats)?;
        }

        Ok(stats)
    }

    /// Emit one file's block, or record why it was skipped
    fn emit_file<W: Write>(
        &self,
        node: &Node,
        out: &mut W,
        stats: &mut AggregateStats,
    ) -> io::Result<()> {
        let path = node.path.display().to_string();

        if let Some(limit) = self.max_file_size {
            if let Ok(meta) = fs::metadata(&node.path) {
                if meta.len() > limit {
                    eprintln!(
                        "Skipping {}: file too large ({})",
                        path,
                        format_file_size(meta.len())
                    );
                    stats.oversized_skipped += 1;
                    return Ok(());
                }
            }
        }

        let content = match fs::read(&node.path) {
            Ok(content) => content,
            Err(e) => {
                let diagnostic = format!("Error reading {}: {}\n", path, e);
                out.write_all(diagnostic.as_bytes())?;
                stats.read_errors += 1;
                stats.bytes_written += diagnostic.len();
                return Ok(());
            }
        };

        if is_binary(&content) {
            eprintln!("Skipping binary file {}", path);
            stats.binaries_skipped += 1;
            return Ok(());
        }

        let header = format!("{} {}\n", comment_prefix(&node.path), path);
        out.write_all(header.as_bytes())?;
        out.write_all(&content)?;
        out.write_all(b"\n\n")?;

        stats.files_emitted += 1;
        stats.bytes_written += header.len() + content.len() + 2;
        stats.file_details.insert(
            path,
            FileReportInfo {
                lines: content.iter().filter(|&&b| b == b'\n').count(),
                chars: String::from_utf8_lossy(&content).chars().count(),
            },
        );

        Ok(())
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
