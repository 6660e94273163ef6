//! Path tree construction
//!
//! Converts a flat list of `/`-separated relative file paths with sizes into a
//! directory tree. Shared prefixes are deduplicated on insertion and directory
//! sizes are restored by one explicit aggregation pass once all files are in.

use super::node::{Address, NodeId, TreeNode};
use crate::error::TreeError;
use tracing::debug;

/// Arena-backed tree of files and directories.
///
/// The tree owns every node top-down through its arena; parent links are plain
/// indices used for navigation.
#[derive(Debug, Clone)]
pub struct PathTree {
    nodes: Vec<TreeNode>,
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTree {
    /// Create a tree holding only an empty root.
    pub fn new() -> Self {
        PathTree {
            nodes: vec![TreeNode::root()],
        }
    }

    /// Build a complete tree from `(path, size)` pairs: insert all, then aggregate.
    pub fn from_files<I, S>(files: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut tree = PathTree::new();
        for (path, size) in files {
            tree.insert(path.as_ref(), size)?;
        }
        tree.aggregate_sizes();
        debug!(
            files = tree.file_count(),
            nodes = tree.len(),
            total_size = tree.total_size(),
            "Built path tree"
        );
        Ok(tree)
    }

    /// Discard every node and start over from an empty root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(TreeNode::root());
    }

    /// Insert a file path, creating missing directories along the way.
    ///
    /// The node for the full path gets `size`; inserting the same path again
    /// overwrites it. Paths that are empty or contain an empty segment are
    /// rejected and leave the tree untouched.
    pub fn insert(&mut self, path: &str, size: u64) -> Result<NodeId, TreeError> {
        let segments = split_path(path)?;

        let mut current = NodeId::ROOT;
        for segment in segments {
            current = match self.find_child(current, segment) {
                Some(existing) => existing,
                None => self.push_child(current, segment),
            };
        }
        self.nodes[current.0].size = size;
        Ok(current)
    }

    /// Recompute every directory's size from its children.
    ///
    /// Children always sit after their parent in the arena, so walking the arena
    /// backwards visits every subtree before the directory that holds it.
    /// Sums saturate at `u64::MAX`.
    pub fn aggregate_sizes(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            if self.nodes[index].children.is_empty() {
                continue;
            }
            let total: u64 = self.nodes[index]
                .children
                .iter()
                .map(|child| self.nodes[child.0].size)
                .fold(0, u64::saturating_add);
            self.nodes[index].size = total;
        }
    }

    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == name)
    }

    fn push_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(name.to_string(), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node by id.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// All nodes with their ids, root first, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Aggregated size of the whole tree.
    pub fn total_size(&self) -> u64 {
        self.root().size
    }

    /// Number of files (leaf nodes) in the tree; the root never counts.
    pub fn file_count(&self) -> usize {
        self.nodes.iter().skip(1).filter(|n| n.is_leaf()).count()
    }

    /// Number of nodes below the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full `/`-joined path of a node, empty for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == NodeId::ROOT {
                break;
            }
            let node = &self.nodes[node_id.0];
            segments.push(node.name.as_str());
            current = node.parent;
        }
        segments.reverse();
        segments.join("/")
    }

    /// Look up a node by its full path.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let segments = split_path(path).ok()?;
        let mut current = NodeId::ROOT;
        for segment in segments {
            current = self.find_child(current, segment)?;
        }
        Some(current)
    }

    // --- Address scheme ---

    pub fn root_address(&self) -> Address {
        Address::Root
    }

    /// Translate a node id into its `(parent, row)` address.
    pub fn address_of(&self, id: NodeId) -> Option<Address> {
        let node = self.get(id)?;
        let Some(parent) = node.parent else {
            return Some(Address::Root);
        };
        let row = self.nodes[parent.0]
            .children
            .iter()
            .position(|child| *child == id)?;
        Some(Address::Child { parent, row })
    }

    /// Translate an address back into a node id.
    pub fn resolve(&self, address: Address) -> Option<NodeId> {
        match address {
            Address::Root => Some(NodeId::ROOT),
            Address::Child { parent, row } => self.get(parent)?.children.get(row).copied(),
        }
    }

    /// Address of the node's parent; `None` for the root.
    pub fn parent(&self, address: Address) -> Option<Address> {
        let id = self.resolve(address)?;
        let parent = self.nodes[id.0].parent?;
        self.address_of(parent)
    }

    pub fn child_count(&self, address: Address) -> usize {
        self.resolve(address)
            .map(|id| self.nodes[id.0].children.len())
            .unwrap_or(0)
    }

    pub fn child(&self, address: Address, row: usize) -> Option<Address> {
        let parent = self.resolve(address)?;
        if row < self.nodes[parent.0].children.len() {
            Some(Address::Child { parent, row })
        } else {
            None
        }
    }

    pub fn name(&self, address: Address) -> Option<&str> {
        self.resolve(address).map(|id| self.nodes[id.0].name())
    }

    pub fn size(&self, address: Address) -> Option<u64> {
        self.resolve(address).map(|id| self.nodes[id.0].size)
    }

    pub fn is_leaf(&self, address: Address) -> Option<bool> {
        self.resolve(address).map(|id| self.nodes[id.0].is_leaf())
    }
}

/// Split a relative path into segments, rejecting empty paths and empty segments.
fn split_path(path: &str) -> Result<Vec<&str>, TreeError> {
    if path.is_empty() {
        return Err(TreeError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('/').collect();
    if let Some(position) = segments.iter().position(|s| s.is_empty()) {
        return Err(TreeError::EmptySegment {
            path: path.to_string(),
            position,
        });
    }
    Ok(segments)
}
