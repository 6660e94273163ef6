//! Default values seeded into every config builder.

use crate::config::{default_summary_unit_threshold, default_tree_unit_threshold};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-populated with the display defaults.
///
/// Remaining fields fall back to their serde defaults on deserialization.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("display.sort_key", "name")?
        .set_default("display.sort_order", "ascending")?
        .set_default(
            "display.tree_unit_threshold",
            default_tree_unit_threshold(),
        )?
        .set_default(
            "display.summary_unit_threshold",
            default_summary_unit_threshold(),
        )?
        .set_default("display.color", true)
}
