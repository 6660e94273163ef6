//! Display Ordering
//!
//! Orders siblings for display independently of the insertion order stored in
//! the tree. Directories always come before files; within each group the
//! requested key and direction apply.

use crate::tree::{NodeId, PathTree};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column used to order siblings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Size,
}

/// Requested sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Directories-first comparator for siblings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingPolicy {
    pub key: SortKey,
    pub order: SortOrder,
}

impl OrderingPolicy {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Total order of two siblings.
    ///
    /// The directory/file split ignores `order`. Equal keys compare `Equal` so a
    /// stable sort keeps insertion order.
    pub fn compare(&self, tree: &PathTree, lhs: NodeId, rhs: NodeId) -> Ordering {
        let lnode = tree.node(lhs);
        let rnode = tree.node(rhs);

        match (lnode.is_leaf(), rnode.is_leaf()) {
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            _ => {}
        }

        let by_key = match self.key {
            SortKey::Name => compare_names(lnode.name(), rnode.name()),
            SortKey::Size => lnode.size().cmp(&rnode.size()),
        };
        match self.order {
            SortOrder::Ascending => by_key,
            SortOrder::Descending => by_key.reverse(),
        }
    }

    /// Whether `lhs` strictly precedes `rhs`.
    pub fn precedes(&self, tree: &PathTree, lhs: NodeId, rhs: NodeId) -> bool {
        self.compare(tree, lhs, rhs) == Ordering::Less
    }

    /// Children of `parent` in display order. The tree is left as is.
    pub fn sorted_children(&self, tree: &PathTree, parent: NodeId) -> Vec<NodeId> {
        let mut children = tree.node(parent).children().to_vec();
        children.sort_by(|a, b| self.compare(tree, *a, *b));
        children
    }
}

fn compare_names(lhs: &str, rhs: &str) -> Ordering {
    lhs.chars()
        .flat_map(char::to_lowercase)
        .cmp(rhs.chars().flat_map(char::to_lowercase))
}
