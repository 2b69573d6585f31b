//! Global error handling for treecat

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for treecat operations
#[derive(Error, Debug)]
pub enum TreecatError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Errors reported by the directory walk
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Clipboard-related errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Path not found in the current tree
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for treecat operations
pub type Result<T> = std::result::Result<T, TreecatError>;
