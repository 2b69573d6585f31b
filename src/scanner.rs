/*!
 * Directory scanning: builds the in-memory tree model
 */

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TreecatError};
use crate::types::{NodeId, Tree};

/// Builds a [`Tree`] from a filesystem root.
///
/// Entries are visited in lexicographic order by file name, so two
/// scans of an unchanged subtree produce identical trees. Any error
/// reported by the walk aborts the scan; no partial tree is returned.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a scanner for the given root path (file or directory)
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Walk the root and return the complete tree.
    ///
    /// The root itself is always represented, even when it has no
    /// children; a plain-file root yields a single-node tree.
    pub fn scan(&self) -> Result<Tree> {
        let root_meta = fs::metadata(&self.root)?;
        let mut tree = Tree::new(self.root.clone(), root_meta.is_dir());

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = entry?;
            let parent = self.parent_id(&tree, entry.path())?;
            tree.push_child(
                parent,
                entry.path().to_path_buf(),
                entry.file_type().is_dir(),
            );
        }

        Ok(tree)
    }

    /// Resolve the tree node for an entry's parent directory.
    ///
    /// walkdir yields directories before their contents, so the parent
    /// is always already in the index; a miss means the walk produced
    /// an entry outside the root.
    fn parent_id(&self, tree: &Tree, path: &Path) -> Result<NodeId> {
        path.parent()
            .and_then(|p| tree.lookup(p))
            .ok_or_else(|| TreecatError::PathNotFound(path.display().to_string()))
    }
}
