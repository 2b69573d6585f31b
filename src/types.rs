/*!
 * Core types and data structures for the treecat application
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Identifier of a node inside a [`Tree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Represents one filesystem entry in the tree model
#[derive(Debug, Clone)]
pub struct Node {
    /// Path of the entry, as derived from the scan root
    pub path: PathBuf,
    /// Whether the entry is a directory, fixed at creation
    pub is_dir: bool,
    /// Selection flag, mutated only through [`Tree::set_selected`]
    pub selected: bool,
    /// Children in visit order; empty for non-directory nodes
    pub children: Vec<NodeId>,
}

/// A scanned directory tree: node arena, root id, and a path index
/// for O(1) identity resolution.
///
/// Every non-root node has exactly one parent. The tree is rebuilt
/// wholesale whenever the scan root changes; neither the arena nor the
/// index is ever patched incrementally.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    index: HashMap<PathBuf, NodeId>,
}

impl Tree {
    /// Create a tree containing only a root node
    pub fn new(root_path: PathBuf, is_dir: bool) -> Self {
        let root = Node {
            path: root_path.clone(),
            is_dir,
            selected: false,
            children: Vec::new(),
        };
        let mut index = HashMap::new();
        index.insert(root_path, NodeId(0));
        Self {
            nodes: vec![root],
            root: NodeId(0),
            index,
        }
    }

    /// Id of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds only the root node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Access a node by id
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Resolve a path to its node id
    pub fn lookup(&self, path: &Path) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    /// Append a new node under `parent` and register it in the path
    /// index. Children keep their insertion order.
    pub(crate) fn push_child(&mut self, parent: NodeId, path: PathBuf, is_dir: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            path: path.clone(),
            is_dir,
            selected: false,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        self.index.insert(path, id);
        id
    }

    /// Set a node's selection flag and, for directories, cascade the
    /// same value to every transitive descendant.
    ///
    /// There is no upward propagation: toggling a leaf never touches
    /// its ancestors or siblings, and a directory's own flag does not
    /// reflect mixed descendant states. Applying the same value twice
    /// is a no-op.
    pub fn set_selected(&mut self, id: NodeId, value: bool) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            self.nodes[current.0].selected = value;
            if self.nodes[current.0].is_dir {
                stack.extend(self.nodes[current.0].children.iter().copied());
            }
        }
    }

    /// Iterate node ids in depth-first pre-order, children in stored
    /// order. This is the canonical traversal order for aggregation.
    pub fn walk(&self) -> TreeWalk<'_> {
        TreeWalk {
            tree: self,
            stack: vec![self.root],
        }
    }
}

/// Depth-first pre-order iterator over a [`Tree`]
pub struct TreeWalk<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for TreeWalk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Reverse so the first child is popped first
        self.stack.extend(node.children.iter().rev().copied());
        Some(id)
    }
}
