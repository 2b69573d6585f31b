/*!
 * Configuration handling for treecat
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::filter::FileFilter;

/// Batch-mode size gate: files above this are skipped with a notice
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Command-line arguments for treecat
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treecat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate directory contents into annotated text for LLM context",
    long_about = "Walks the given paths and concatenates every qualifying text file \
into one stream on stdout, each file prefixed with a comment-style header line. \
Binary files, oversized files, and filtered files are skipped with notices on stderr."
)]
pub struct Args {
    /// Files or directories to aggregate
    pub paths: Vec<String>,

    /// Comma-separated list of file extensions to include (e.g. "go,py,md");
    /// when empty, every extension is included
    #[clap(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Comma-separated list of directory tokens to exclude; a file is
    /// skipped when its directory path contains any token as a substring
    #[clap(long = "exclude-dir", value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Copy the aggregated output to the system clipboard
    #[clap(long, help = "Copy output to system clipboard")]
    pub clip: bool,

    /// Print a per-file summary table to stderr after the run
    #[clap(long)]
    pub summary: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Paths to process, in the order given
    pub paths: Vec<PathBuf>,

    /// Extension allow-list tokens (raw, normalized by the filter)
    pub extensions: Vec<String>,

    /// Directory exclude-list tokens
    pub exclude_dirs: Vec<String>,

    /// Copy output to clipboard
    pub clip: bool,

    /// Print summary report
    pub summary: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            paths: args.paths.iter().map(PathBuf::from).collect(),
            extensions: args.ext,
            exclude_dirs: args.exclude_dirs,
            clip: args.clip,
            summary: args.summary,
        }
    }

    /// Build the batch-mode inclusion filter from the configured
    /// tokens. Malformed or empty tokens are ignored, never rejected.
    pub fn filter(&self) -> FileFilter {
        FileFilter::new(&self.extensions, &self.exclude_dirs)
    }
}
