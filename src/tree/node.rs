//! Tree node types and addressing

/// Index of a node inside a [`super::PathTree`] arena.
///
/// Nodes are only ever appended, so a child's id is always larger than its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The container node every tree starts with.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A file or directory in the tree.
///
/// Whether a node is a file or a directory is derived from its children, never stored.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) name: String,
    pub(crate) size: u64,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TreeNode {
    pub(crate) fn root() -> Self {
        Self::new(String::new(), None)
    }

    pub(crate) fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            size: 0,
            parent,
            children: Vec::new(),
        }
    }

    /// Single path segment; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Non-owning back reference, used for navigation only.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Position of a node as seen by a hierarchical view.
///
/// Every non-root node is addressed by its parent and its row among the parent's
/// children. The root has its own sentinel address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Root,
    Child { parent: NodeId, row: usize },
}

impl Address {
    pub fn is_root(&self) -> bool {
        matches!(self, Address::Root)
    }
}
