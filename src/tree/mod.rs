//! File tree built from a torrent's flat file list

pub mod builder;
pub mod node;

pub use builder::PathTree;
pub use node::{Address, NodeId, TreeNode};
