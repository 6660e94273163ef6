//! Config and state locations resolved through `directories::ProjectDirs`.

use crate::error::ApiError;
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "torview", "torview")
}

/// Path of the global config file, e.g. `~/.config/torview/config.toml`.
///
/// `None` when the platform has no home directory.
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory for runtime state such as the default log file.
///
/// Falls back to the data-local directory on platforms without a state directory.
pub fn state_dir() -> Result<PathBuf, ApiError> {
    let dirs = project_dirs().ok_or_else(|| {
        ApiError::ConfigError("Could not determine platform directories".to_string())
    })?;
    Ok(dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_local_dir().to_path_buf()))
}
