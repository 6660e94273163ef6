//! File tree display adapter
//!
//! Owns the tree currently on display and maps addresses to rows in the order
//! chosen by an [`OrderingPolicy`]. The underlying tree keeps insertion order.

use crate::error::TreeError;
use crate::format::human_size;
use crate::ordering::OrderingPolicy;
use crate::tree::{Address, NodeId, PathTree};
use serde::Serialize;
use tracing::warn;

/// A node in display order, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTreeEntry {
    pub name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileTreeEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct FilesModel {
    tree: PathTree,
    policy: OrderingPolicy,
}

impl FilesModel {
    pub fn new(policy: OrderingPolicy) -> Self {
        Self {
            tree: PathTree::new(),
            policy,
        }
    }

    /// Replace the displayed tree with one built from `files`.
    ///
    /// The new tree is built and aggregated on the side; on error the current
    /// tree stays on display untouched.
    pub fn set_files<I, S>(&mut self, files: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let tree = PathTree::from_files(files).map_err(|e| {
            warn!(error = %e, "Rejected torrent file list");
            e
        })?;
        self.tree = tree;
        Ok(())
    }

    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OrderingPolicy) {
        self.policy = policy;
    }

    pub fn row_count(&self, parent: Address) -> usize {
        self.tree.child_count(parent)
    }

    /// Child addresses of `parent` in display order.
    pub fn rows(&self, parent: Address) -> Vec<Address> {
        let Some(parent_id) = self.tree.resolve(parent) else {
            return Vec::new();
        };
        let children = self.tree.node(parent_id).children();
        let mut rows: Vec<usize> = (0..children.len()).collect();
        rows.sort_by(|a, b| self.policy.compare(&self.tree, children[*a], children[*b]));
        rows.into_iter()
            .map(|row| Address::Child {
                parent: parent_id,
                row,
            })
            .collect()
    }

    /// A lone top-level entry, typically the torrent's root folder.
    pub fn single_top_level(&self) -> bool {
        self.tree.child_count(Address::Root) == 1
    }

    /// Indented text tree, directories suffixed with `/`.
    pub fn render(&self, unit_threshold: u64) -> String {
        let mut out = String::new();
        // (node, indent, last among its siblings), popped in display order
        let mut stack: Vec<(NodeId, String, bool)> = Vec::new();
        self.push_children(&mut stack, NodeId::ROOT, String::new());

        while let Some((id, indent, last)) = stack.pop() {
            let node = self.tree.node(id);
            let branch = if last { "└── " } else { "├── " };
            let suffix = if node.is_leaf() { "" } else { "/" };
            out.push_str(&format!(
                "{}{}{}{}  {}\n",
                indent,
                branch,
                node.name(),
                suffix,
                human_size(node.size(), unit_threshold)
            ));
            if !node.is_leaf() {
                let nested = format!("{}{}", indent, if last { "    " } else { "│   " });
                self.push_children(&mut stack, id, nested);
            }
        }
        out
    }

    fn push_children(
        &self,
        stack: &mut Vec<(NodeId, String, bool)>,
        parent: NodeId,
        indent: String,
    ) {
        let children = self.policy.sorted_children(&self.tree, parent);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push((child, indent.clone(), i + 1 == count));
        }
    }

    /// Top-level entries in display order with nested children.
    ///
    /// Built bottom-up over the arena: a child's index is always larger than
    /// its parent's, so every child entry is finished before its parent takes it.
    pub fn entries(&self) -> Vec<FileTreeEntry> {
        let mut built: Vec<Option<FileTreeEntry>> = vec![None; self.tree.len() + 1];
        for (id, node) in self.tree.iter().collect::<Vec<_>>().into_iter().rev() {
            let children: Vec<FileTreeEntry> = self
                .policy
                .sorted_children(&self.tree, id)
                .into_iter()
                .filter_map(|child| built[child.index()].take())
                .collect();
            if id == NodeId::ROOT {
                return children;
            }
            built[id.index()] = Some(FileTreeEntry {
                name: node.name().to_string(),
                size: node.size(),
                children,
            });
        }
        Vec::new()
    }
}
