/*!
 * treecat - Aggregate directory contents into annotated text
 *
 * This library walks filesystem subtrees and concatenates every
 * qualifying text file into one annotated stream, for feeding source
 * trees into text-consuming tools such as LLM context assembly.
 */

pub mod aggregate;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod session;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use aggregate::{AggregateStats, Aggregator};
pub use config::{Args, Config, MAX_FILE_SIZE};
pub use content::{comment_prefix, is_binary};
pub use error::{Result, TreecatError};
pub use filter::FileFilter;
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use session::Session;
pub use types::{Node, NodeId, Tree};
pub use utils::format_file_size;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
