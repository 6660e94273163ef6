//! Configuration
//!
//! Layered viewer configuration: built-in defaults, the global config file,
//! an explicit `--config` file, then `TORVIEW__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::ordering::{OrderingPolicy, SortKey, SortOrder};
use serde::{Deserialize, Serialize};

/// Top-level viewer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TorviewConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// How trees, sizes, and headings are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Column used to order siblings in the file tree
    #[serde(default)]
    pub sort_key: SortKey,

    #[serde(default)]
    pub sort_order: SortOrder,

    /// Unit switch threshold for sizes in the file tree
    #[serde(default = "default_tree_unit_threshold")]
    pub tree_unit_threshold: u64,

    /// Unit switch threshold for sizes in the summary block
    #[serde(default = "default_summary_unit_threshold")]
    pub summary_unit_threshold: u64,

    /// Bold/underlined section headings
    #[serde(default = "default_true")]
    pub color: bool,
}

pub(crate) fn default_tree_unit_threshold() -> u64 {
    1000
}

pub(crate) fn default_summary_unit_threshold() -> u64 {
    1024
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            tree_unit_threshold: default_tree_unit_threshold(),
            summary_unit_threshold: default_summary_unit_threshold(),
            color: default_true(),
        }
    }
}

impl DisplayConfig {
    pub fn policy(&self) -> OrderingPolicy {
        OrderingPolicy::new(self.sort_key, self.sort_order)
    }
}
