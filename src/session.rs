/*!
 * Interactive core: the surface a tree-selection UI drives
 *
 * The UI owns rendering, event wiring, and the confirm/copy action;
 * this module owns the tree, the selection cascade, and the output
 * recompute. Every toggle re-runs the aggregator over the whole tree.
 */

use std::path::{Path, PathBuf};

use crate::aggregate::Aggregator;
use crate::error::{Result, TreecatError};
use crate::scanner::Scanner;
use crate::types::{Node, Tree};

/// One open tree plus its selection state
pub struct Session {
    tree: Tree,
}

impl Session {
    /// Scan `root` and open a session over the resulting tree.
    ///
    /// A scan failure is surfaced to the caller without partial tree
    /// state; the previous session, if any, stays untouched.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let tree = Scanner::new(root).scan()?;
        Ok(Self { tree })
    }

    /// The underlying tree, for rendering
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Set the selection flag of the node at `path`, cascading to all
    /// descendants when it is a directory.
    pub fn toggle(&mut self, path: &Path, value: bool) -> Result<()> {
        let id = self
            .tree
            .lookup(path)
            .ok_or_else(|| TreecatError::PathNotFound(path.display().to_string()))?;
        self.tree.set_selected(id, value);
        Ok(())
    }

    /// Selection flag of the node at `path`, if it exists
    pub fn is_selected(&self, path: &Path) -> Option<bool> {
        self.tree.lookup(path).map(|id| self.tree.node(id).selected)
    }

    /// Recompute the aggregated output over the current selection.
    ///
    /// Full recompute on every call; there is no size gate and no
    /// incremental diffing. Invalid UTF-8 in otherwise-text files is
    /// replaced lossily for display.
    pub fn output(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail
        let _ = Aggregator::new().run(&self.tree, is_selected_file, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Qualifier used by interactive aggregation
fn is_selected_file(node: &Node) -> bool {
    node.selected && !node.is_dir
}
