//! Flat-arena KD-tree over the emotion lexicon.
//!
//! Nodes live in one `Vec`; children are arena indices, not boxed
//! pointers. The arena never shrinks or reorders after construction, so
//! an index handed out during the build stays valid for the tree's
//! lifetime.

pub mod builder;

use limbic_core::Axis;

/// One tree node.
///
/// `item` indexes the entry table held by the owning snapshot; `left`
/// and `right` index this tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub item: usize,
    pub axis: Axis,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// The arena and its root.
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl KdTree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: Option<usize>) -> Self {
        Self { nodes, root }
    }

    /// Number of nodes, equal to the number of indexed entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the root, `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// The full arena, in construction order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Checked node lookup. Traversal uses this instead of indexing so a
    /// corrupt reference surfaces as an error, never a panic.
    pub(crate) fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }
}
