//! MergeService: orchestrates sources, applies merge policy, deserializes to TorviewConfig.

use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::TorviewConfig;
use config::ConfigError;
use std::path::Path;
use tracing::debug;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<TorviewConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => explicit_file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        let config: TorviewConfig = config.try_deserialize()?;
        debug!(?explicit, "Loaded configuration");
        Ok(config)
    }
}
